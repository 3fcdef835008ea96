//! Geometric transforms: quarter-turn rotation, mirroring and resizing.

use std::fmt;
use std::str::FromStr;

use image::imageops;

use crate::buffer::Image;
use crate::config::FilterType;
use crate::error::EditError;

/// Clockwise rotation by a multiple of 90 degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotateAngle {
    Deg90,
    Deg180,
    Deg270,
}

impl RotateAngle {
    /// Map a degree value onto a supported angle.
    pub fn from_degrees(degrees: i32) -> Option<Self> {
        match degrees {
            90 => Some(RotateAngle::Deg90),
            180 => Some(RotateAngle::Deg180),
            270 => Some(RotateAngle::Deg270),
            _ => None,
        }
    }

    pub fn degrees(self) -> i32 {
        match self {
            RotateAngle::Deg90 => 90,
            RotateAngle::Deg180 => 180,
            RotateAngle::Deg270 => 270,
        }
    }
}

impl FromStr for RotateAngle {
    type Err = EditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i32>()
            .ok()
            .and_then(RotateAngle::from_degrees)
            .ok_or_else(|| EditError::invalid(format!("rotation must be 90, 180 or 270, got {s:?}")))
    }
}

/// Mirror axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipAxis {
    /// Mirror left-right.
    Horizontal,
    /// Mirror top-bottom.
    Vertical,
}

impl FromStr for FlipAxis {
    type Err = EditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "horizontal" => Ok(FlipAxis::Horizontal),
            "vertical" => Ok(FlipAxis::Vertical),
            _ => Err(EditError::invalid(format!(
                "flip axis must be horizontal or vertical, got {s:?}"
            ))),
        }
    }
}

impl fmt::Display for FlipAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlipAxis::Horizontal => f.write_str("horizontal"),
            FlipAxis::Vertical => f.write_str("vertical"),
        }
    }
}

/// Rotate clockwise by a quarter, half or three-quarter turn.
pub fn rotate(image: &Image, angle: RotateAngle) -> Image {
    match angle {
        RotateAngle::Deg90 => map_buffer!(image, |buf| imageops::rotate90(buf)),
        RotateAngle::Deg180 => map_buffer!(image, |buf| imageops::rotate180(buf)),
        RotateAngle::Deg270 => map_buffer!(image, |buf| imageops::rotate270(buf)),
    }
}

/// Mirror the image along `axis`.
pub fn flip(image: &Image, axis: FlipAxis) -> Image {
    match axis {
        FlipAxis::Horizontal => map_buffer!(image, |buf| imageops::flip_horizontal(buf)),
        FlipAxis::Vertical => map_buffer!(image, |buf| imageops::flip_vertical(buf)),
    }
}

/// Resize to exact dimensions, ignoring aspect ratio.
///
/// Callers validate that both dimensions are non-zero.
pub fn resize(image: &Image, width: u32, height: u32, filter: FilterType) -> Image {
    // Fast path: if dimensions match, just clone
    if image.dimensions() == (width, height) {
        return image.clone();
    }
    let filter = filter.to_image_filter();
    map_buffer!(image, |buf| imageops::resize(buf, width, height, filter))
}
