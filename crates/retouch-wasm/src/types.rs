//! WASM-compatible wrapper types for image data.
//!
//! This module provides JavaScript-friendly types that wrap the core Retouch
//! image, handling the conversion between Rust and JavaScript data
//! representations.

use retouch_core::{ColorDepth, Image};
use wasm_bindgen::prelude::*;

/// An image snapshot for JavaScript.
///
/// Holds a copy of the pixels the editor wants displayed. Gray images keep one
/// byte per pixel, color images three; use `rgba()` to get data ready for a
/// canvas `ImageData`.
///
/// # Memory Management
///
/// The pixel data is stored in WASM memory. `pixels()` and `rgba()` copy it
/// into a JavaScript `Uint8Array`. Call the generated `free()` to release
/// WASM memory early; otherwise wasm-bindgen's finalizer handles it.
#[wasm_bindgen]
pub struct JsImage {
    image: Image,
}

#[wasm_bindgen]
impl JsImage {
    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Samples per pixel: 1 for grayscale, 3 for RGB
    #[wasm_bindgen(getter)]
    pub fn channels(&self) -> u8 {
        self.image.depth().channels()
    }

    /// Whether the image is single-channel
    #[wasm_bindgen(getter)]
    pub fn is_grayscale(&self) -> bool {
        self.image.depth() == ColorDepth::Gray
    }

    /// Get the number of bytes in the pixel buffer
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.image.as_bytes().len()
    }

    /// Returns the raw pixel data (row-major, `channels` bytes per pixel).
    pub fn pixels(&self) -> Vec<u8> {
        self.image.as_bytes().to_vec()
    }

    /// Returns RGBA pixel data with opaque alpha, suitable for `ImageData`.
    pub fn rgba(&self) -> Vec<u8> {
        self.image.to_rgba_bytes()
    }
}

impl JsImage {
    pub(crate) fn from_image(image: &Image) -> Self {
        Self {
            image: image.clone(),
        }
    }
}
