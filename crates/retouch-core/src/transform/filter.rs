//! Neighbourhood filters: Gaussian blur and Canny edge detection.

use image::imageops;
use imageproc::edges::canny;

use crate::buffer::Image;

/// Lower hysteresis threshold for edge detection.
pub const EDGE_LOW_THRESHOLD: f32 = 100.0;

/// Upper hysteresis threshold for edge detection.
pub const EDGE_HIGH_THRESHOLD: f32 = 200.0;

/// Gaussian sigma for a square kernel of side `kernel_size`.
///
/// Uses the conventional derivation `0.3 * ((k - 1) * 0.5 - 1) + 0.8`, so a
/// 3x3 kernel blurs with sigma 0.8 and a 201x201 kernel with sigma 30.5.
pub fn blur_sigma(kernel_size: u32) -> f32 {
    0.3 * ((kernel_size as f32 - 1.0) * 0.5 - 1.0) + 0.8
}

/// Gaussian blur with a square kernel.
///
/// Even kernel sizes are bumped to the next odd value.
pub fn blur(image: &Image, kernel_size: u32) -> Image {
    let kernel_size = if kernel_size % 2 == 0 {
        kernel_size + 1
    } else {
        kernel_size
    };
    let sigma = blur_sigma(kernel_size);
    map_buffer!(image, |buf| imageops::blur(buf, sigma))
}

/// Canny edge map of the image's luma channel.
///
/// The result is always grayscale with edge pixels at 255 and everything
/// else at 0.
pub fn edge_detect(image: &Image) -> Image {
    let luma = match image {
        Image::Gray(buf) => buf.clone(),
        Image::Rgb(buf) => imageops::grayscale(buf),
    };
    Image::Gray(canny(&luma, EDGE_LOW_THRESHOLD, EDGE_HIGH_THRESHOLD))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::ColorDepth;
    use image::{GrayImage, Luma, Rgb, RgbImage};

    fn checker(width: u32, height: u32) -> Image {
        Image::Rgb(RgbImage::from_fn(width, height, |x, _| {
            if x < width / 2 {
                Rgb([0, 0, 0])
            } else {
                Rgb([255, 255, 255])
            }
        }))
    }

    #[test]
    fn test_blur_sigma() {
        assert!((blur_sigma(3) - 0.8).abs() < 1e-6);
        assert!((blur_sigma(201) - 30.5).abs() < 1e-4);
    }

    #[test]
    fn test_blur_preserves_shape() {
        let img = checker(20, 10);
        let out = blur(&img, 5);
        assert_eq!(out.dimensions(), (20, 10));
        assert_eq!(out.depth(), ColorDepth::Rgb);
    }

    #[test]
    fn test_blur_softens_step() {
        let img = checker(20, 4);
        let out = blur(&img, 7);
        // Pixel just left of the step picks up some white.
        let idx = (9 * 3) as usize;
        assert!(out.as_bytes()[idx] > 0);
        assert!(out.as_bytes()[idx] < 255);
    }

    #[test]
    fn test_even_kernel_is_forced_odd() {
        let img = checker(16, 4);
        assert_eq!(blur(&img, 4), blur(&img, 5));
    }

    #[test]
    fn test_blur_flat_image_unchanged() {
        let img = Image::Gray(GrayImage::from_pixel(8, 8, Luma([77])));
        let out = blur(&img, 3);
        assert!(out.as_bytes().iter().all(|&v| (76..=78).contains(&v)));
    }

    #[test]
    fn test_edge_detect_outputs_binary_gray() {
        let out = edge_detect(&checker(32, 32));
        assert_eq!(out.depth(), ColorDepth::Gray);
        assert_eq!(out.dimensions(), (32, 32));
        assert!(out.as_bytes().iter().all(|&v| v == 0 || v == 255));
        assert!(out.as_bytes().iter().any(|&v| v == 255));
    }

    #[test]
    fn test_edge_detect_flat_image_has_no_edges() {
        let img = Image::Gray(GrayImage::from_pixel(16, 16, Luma([90])));
        let out = edge_detect(&img);
        assert!(out.as_bytes().iter().all(|&v| v == 0));
    }
}
