//! The pixel buffer type passed between the history, preview and transform layers.

use image::{DynamicImage, GrayImage, RgbImage};

/// Channel layout of an [`Image`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorDepth {
    /// One 8-bit luma channel.
    Gray,
    /// Three 8-bit channels, RGB order.
    Rgb,
}

impl ColorDepth {
    /// Number of bytes per pixel.
    pub fn channels(self) -> u8 {
        match self {
            ColorDepth::Gray => 1,
            ColorDepth::Rgb => 3,
        }
    }
}

/// An owned 8-bit image, either grayscale or RGB.
///
/// Images are never modified once produced. Every transform returns a new
/// `Image`, so a value stored in the edit history is an independent snapshot.
#[derive(Debug, Clone, PartialEq)]
pub enum Image {
    Gray(GrayImage),
    Rgb(RgbImage),
}

impl Image {
    /// Convert a decoded image, flattening alpha and 16-bit samples.
    ///
    /// Luma sources stay grayscale; everything else becomes RGB.
    pub fn from_dynamic(img: DynamicImage) -> Self {
        match img {
            DynamicImage::ImageLuma8(buf) => Image::Gray(buf),
            DynamicImage::ImageRgb8(buf) => Image::Rgb(buf),
            other if other.color().has_color() => Image::Rgb(other.into_rgb8()),
            other => Image::Gray(other.into_luma8()),
        }
    }

    /// Build an image from raw row-major samples.
    ///
    /// Returns `None` if `pixels` does not hold exactly
    /// `width * height * depth.channels()` bytes.
    pub fn from_raw(width: u32, height: u32, depth: ColorDepth, pixels: Vec<u8>) -> Option<Self> {
        match depth {
            ColorDepth::Gray => GrayImage::from_raw(width, height, pixels).map(Image::Gray),
            ColorDepth::Rgb => RgbImage::from_raw(width, height, pixels).map(Image::Rgb),
        }
    }

    pub fn width(&self) -> u32 {
        match self {
            Image::Gray(buf) => buf.width(),
            Image::Rgb(buf) => buf.width(),
        }
    }

    pub fn height(&self) -> u32 {
        match self {
            Image::Gray(buf) => buf.height(),
            Image::Rgb(buf) => buf.height(),
        }
    }

    /// Width and height as a tuple.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    pub fn depth(&self) -> ColorDepth {
        match self {
            Image::Gray(_) => ColorDepth::Gray,
            Image::Rgb(_) => ColorDepth::Rgb,
        }
    }

    /// Raw row-major samples.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Image::Gray(buf) => buf.as_raw(),
            Image::Rgb(buf) => buf.as_raw(),
        }
    }

    /// Expand to RGBA with opaque alpha, the layout canvas APIs expect.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        let pixel_count = (self.width() as usize) * (self.height() as usize);
        let mut out = Vec::with_capacity(pixel_count * 4);
        match self {
            Image::Gray(buf) => {
                for &v in buf.as_raw() {
                    out.extend_from_slice(&[v, v, v, 255]);
                }
            }
            Image::Rgb(buf) => {
                for px in buf.as_raw().chunks_exact(3) {
                    out.extend_from_slice(&[px[0], px[1], px[2], 255]);
                }
            }
        }
        out
    }
}
