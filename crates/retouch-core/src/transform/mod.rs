//! Pure image transforms used by the editor.
//!
//! Every function takes the source image by reference and returns a new
//! [`Image`]; nothing is modified in place. The pixel kernels themselves come
//! from `image::imageops` and `imageproc`.
//!
//! # Operations
//!
//! - Color: [`to_grayscale`], [`adjust_brightness`], [`adjust_contrast`]
//! - Filters: [`blur`], [`edge_detect`]
//! - Geometry: [`rotate`], [`flip`], [`resize`]
//!
//! [`Image`]: crate::buffer::Image

/// Apply the same expression to the gray or RGB buffer of an image,
/// keeping the variant.
macro_rules! map_buffer {
    ($image:expr, |$buf:ident| $body:expr) => {
        match $image {
            $crate::buffer::Image::Gray($buf) => $crate::buffer::Image::Gray($body),
            $crate::buffer::Image::Rgb($buf) => $crate::buffer::Image::Rgb($body),
        }
    };
}

mod color;
mod filter;
mod geometry;

pub use color::{adjust_brightness, adjust_contrast, to_grayscale};
pub use filter::{blur, blur_sigma, edge_detect, EDGE_HIGH_THRESHOLD, EDGE_LOW_THRESHOLD};
pub use geometry::{flip, resize, rotate, FlipAxis, RotateAngle};
