//! Color transforms: grayscale conversion, brightness and contrast.

use image::imageops;

use crate::buffer::Image;

/// Convert to a single-channel luma image. Grayscale input is returned as a copy.
pub fn to_grayscale(image: &Image) -> Image {
    match image {
        Image::Gray(buf) => Image::Gray(buf.clone()),
        Image::Rgb(buf) => Image::Gray(imageops::grayscale(buf)),
    }
}

/// Add `offset` to every sample, saturating at 0 and 255.
pub fn adjust_brightness(image: &Image, offset: i32) -> Image {
    if offset == 0 {
        return image.clone();
    }
    map_buffer!(image, |buf| imageops::brighten(buf, offset))
}

/// Multiply every sample by `gain`, rounding and saturating at 0 and 255.
///
/// A gain of 1.0 is the identity; below 1.0 the image darkens toward black.
pub fn adjust_contrast(image: &Image, gain: f32) -> Image {
    map_buffer!(image, |buf| {
        let mut out = buf.clone();
        for sample in out.iter_mut() {
            *sample = (f32::from(*sample) * gain).round().clamp(0.0, 255.0) as u8;
        }
        out
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::ColorDepth;
    use image::{GrayImage, Luma, Rgb, RgbImage};

    fn rgb(value: [u8; 3]) -> Image {
        Image::Rgb(RgbImage::from_pixel(4, 4, Rgb(value)))
    }

    #[test]
    fn test_grayscale_reduces_channels() {
        let gray = to_grayscale(&rgb([255, 255, 255]));
        assert_eq!(gray.depth(), ColorDepth::Gray);
        assert_eq!(gray.dimensions(), (4, 4));
        assert!(gray.as_bytes().iter().all(|&v| v == 255));
    }

    #[test]
    fn test_grayscale_of_gray_is_copy() {
        let img = Image::Gray(GrayImage::from_pixel(2, 2, Luma([42])));
        assert_eq!(to_grayscale(&img), img);
    }

    #[test]
    fn test_brightness_saturates() {
        let brighter = adjust_brightness(&rgb([250, 100, 0]), 10);
        assert_eq!(&brighter.as_bytes()[0..3], &[255, 110, 10]);

        let darker = adjust_brightness(&rgb([250, 100, 5]), -100);
        assert_eq!(&darker.as_bytes()[0..3], &[150, 0, 0]);
    }

    #[test]
    fn test_brightness_keeps_grayscale() {
        let img = Image::Gray(GrayImage::from_pixel(2, 2, Luma([10])));
        let out = adjust_brightness(&img, 5);
        assert_eq!(out.depth(), ColorDepth::Gray);
        assert_eq!(out.as_bytes(), &[15, 15, 15, 15]);
    }

    #[test]
    fn test_contrast_identity_at_unit_gain() {
        let img = rgb([12, 130, 250]);
        assert_eq!(adjust_contrast(&img, 1.0), img);
    }

    #[test]
    fn test_contrast_scales_and_saturates() {
        let out = adjust_contrast(&rgb([100, 200, 10]), 2.0);
        assert_eq!(&out.as_bytes()[0..3], &[200, 255, 20]);

        let dimmed = adjust_contrast(&rgb([100, 200, 10]), 0.2);
        assert_eq!(&dimmed.as_bytes()[0..3], &[20, 40, 2]);
    }

    #[test]
    fn test_source_is_untouched() {
        let img = rgb([100, 100, 100]);
        let _ = adjust_contrast(&img, 2.0);
        let _ = adjust_brightness(&img, 50);
        assert_eq!(img, rgb([100, 100, 100]));
    }
}
