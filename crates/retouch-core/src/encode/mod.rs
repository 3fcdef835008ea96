//! Image encoding for save/export.
//!
//! The committed image is encoded in the format implied by the target path.
//! JPEG output uses a configurable quality; PNG and BMP are lossless.

use std::io::Cursor;
use std::path::Path;

use image::codecs::bmp::BmpEncoder;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, ImageResult};

use crate::buffer::{ColorDepth, Image};
use crate::error::{EditError, Result};
use crate::format::ImageFormat;

/// Encode an image to file bytes.
///
/// # Arguments
///
/// * `image` - The image to encode
/// * `format` - Output container
/// * `quality` - JPEG quality (clamped to 1-100); ignored for PNG and BMP
pub fn encode_image(image: &Image, format: ImageFormat, quality: u8) -> ImageResult<Vec<u8>> {
    let (width, height) = image.dimensions();
    let color = match image.depth() {
        ColorDepth::Gray => ExtendedColorType::L8,
        ColorDepth::Rgb => ExtendedColorType::Rgb8,
    };
    let pixels = image.as_bytes();

    let mut buffer = Cursor::new(Vec::new());
    match format {
        ImageFormat::Jpeg => {
            JpegEncoder::new_with_quality(&mut buffer, quality.clamp(1, 100))
                .write_image(pixels, width, height, color)?;
        }
        ImageFormat::Png => {
            PngEncoder::new(&mut buffer).write_image(pixels, width, height, color)?;
        }
        ImageFormat::Bmp => {
            BmpEncoder::new(&mut buffer).write_image(pixels, width, height, color)?;
        }
    }

    Ok(buffer.into_inner())
}

/// Encode an image in the format implied by `path`.
pub fn encode_for_path(path: &Path, image: &Image, quality: u8) -> Result<Vec<u8>> {
    let format = ImageFormat::from_path(path)?;
    encode_image(image, format, quality).map_err(|e| EditError::Encode {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
