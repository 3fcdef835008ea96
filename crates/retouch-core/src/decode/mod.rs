//! Image loading for the editor.
//!
//! Files are accepted by extension (`.jpg`, `.jpeg`, `.png`, `.bmp`), decoded
//! with the `image` crate and converted to an 8-bit gray or RGB [`Image`].
//! JPEG sources are rotated according to their EXIF orientation tag.

mod orientation;

use std::io::Cursor;
use std::path::Path;

use image::ImageReader;

use crate::buffer::Image;
use crate::error::{EditError, Result};
use crate::format::ImageFormat;

pub use orientation::{apply_orientation, read_orientation, Orientation};

/// Read and decode an image file.
///
/// # Errors
///
/// Returns `EditError::UnsupportedFormat` for an unknown extension,
/// `EditError::Read` if the file cannot be read and `EditError::Decode` if
/// its contents are not a valid image.
pub fn load_image(path: &Path) -> Result<Image> {
    ImageFormat::from_path(path)?;

    let bytes = std::fs::read(path).map_err(|source| EditError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    decode_image(path, &bytes)
}

/// Decode an in-memory image file.
///
/// `path` is only used for format selection and error messages.
pub fn decode_image(path: &Path, bytes: &[u8]) -> Result<Image> {
    let format = ImageFormat::from_path(path)?;
    let decode_err = |message: String| EditError::Decode {
        path: path.to_path_buf(),
        message,
    };

    // Trust the content over the extension, like most viewers do.
    let mut reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| decode_err(e.to_string()))?;
    if reader.format().is_none() {
        reader.set_format(format.to_image_format());
    }
    let is_jpeg = reader.format() == Some(image::ImageFormat::Jpeg);

    let image = Image::from_dynamic(reader.decode().map_err(|e| decode_err(e.to_string()))?);

    if is_jpeg {
        Ok(apply_orientation(image, read_orientation(bytes)))
    } else {
        Ok(image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::ColorDepth;
    use crate::encode::encode_image;
    use image::{GrayImage, Luma, Rgb, RgbImage};
    use std::path::PathBuf;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("retouch-decode-{}-{}", std::process::id(), name));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_decode_png_bytes() {
        let img = Image::Rgb(RgbImage::from_pixel(5, 4, Rgb([10, 20, 30])));
        let bytes = encode_image(&img, ImageFormat::Png, 95).unwrap();

        let decoded = decode_image(Path::new("x.png"), &bytes).unwrap();
        assert_eq!(decoded, img);
    }

    #[test]
    fn test_decode_keeps_grayscale() {
        let img = Image::Gray(GrayImage::from_pixel(3, 3, Luma([200])));
        let bytes = encode_image(&img, ImageFormat::Png, 95).unwrap();

        let decoded = decode_image(Path::new("x.png"), &bytes).unwrap();
        assert_eq!(decoded.depth(), ColorDepth::Gray);
        assert_eq!(decoded.dimensions(), (3, 3));
    }

    #[test]
    fn test_decode_garbage_fails() {
        let result = decode_image(Path::new("x.png"), b"definitely not a png");
        assert!(matches!(result, Err(EditError::Decode { .. })));
    }

    #[test]
    fn test_decode_unsupported_extension() {
        let result = decode_image(Path::new("x.gif"), &[]);
        assert!(matches!(result, Err(EditError::UnsupportedFormat { .. })));
    }

    #[test]
    fn test_load_missing_file() {
        let path = temp_dir("missing").join("nope.png");
        assert!(matches!(load_image(&path), Err(EditError::Read { .. })));
    }

    /// Insert an APP1 Exif segment carrying `orientation` right after SOI.
    fn with_exif_orientation(jpeg: &[u8], orientation: u16) -> Vec<u8> {
        let [hi, lo] = orientation.to_be_bytes();
        let mut app1 = vec![0xFF, 0xE1, 0x00, 0x22];
        app1.extend_from_slice(b"Exif\0\0");
        // Big-endian TIFF header, IFD0 at offset 8.
        app1.extend_from_slice(&[0x4D, 0x4D, 0x00, 0x2A, 0x00, 0x00, 0x00, 0x08]);
        // One entry: tag 0x0112, SHORT, count 1, value inline.
        app1.extend_from_slice(&[0x00, 0x01]);
        app1.extend_from_slice(&[0x01, 0x12, 0x00, 0x03, 0x00, 0x00, 0x00, 0x01, hi, lo, 0x00, 0x00]);
        app1.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]);

        let mut out = jpeg[..2].to_vec();
        out.extend_from_slice(&app1);
        out.extend_from_slice(&jpeg[2..]);
        out
    }

    fn tagged_jpeg(orientation: u16) -> Vec<u8> {
        let img = Image::Rgb(RgbImage::from_pixel(16, 8, Rgb([90, 90, 90])));
        let jpeg = encode_image(&img, ImageFormat::Jpeg, 90).unwrap();
        with_exif_orientation(&jpeg, orientation)
    }

    #[test]
    fn test_read_orientation_from_jpeg() {
        assert_eq!(read_orientation(&tagged_jpeg(6)), Orientation::from_exif(6));
        assert_eq!(read_orientation(&tagged_jpeg(3)), Orientation::from_exif(3));
    }

    #[test]
    fn test_decode_applies_exif_rotation() {
        let decoded = decode_image(Path::new("photo.jpg"), &tagged_jpeg(6)).unwrap();
        assert_eq!(decoded.dimensions(), (8, 16));
    }

    #[test]
    fn test_exif_rotation_follows_content_not_extension() {
        let decoded = decode_image(Path::new("mislabelled.png"), &tagged_jpeg(6)).unwrap();
        assert_eq!(decoded.dimensions(), (8, 16));
    }

    #[test]
    fn test_upright_tag_keeps_dimensions() {
        let decoded = decode_image(Path::new("photo.jpg"), &tagged_jpeg(1)).unwrap();
        assert_eq!(decoded.dimensions(), (16, 8));
    }

    #[test]
    fn test_load_jpeg_file() {
        let dir = temp_dir("jpeg");
        let path = dir.join("photo.jpg");
        let img = Image::Rgb(RgbImage::from_pixel(16, 8, Rgb([128, 128, 128])));
        std::fs::write(&path, encode_image(&img, ImageFormat::Jpeg, 90).unwrap()).unwrap();

        let loaded = load_image(&path).unwrap();
        assert_eq!(loaded.dimensions(), (16, 8));
        assert_eq!(loaded.depth(), ColorDepth::Rgb);
    }
}
