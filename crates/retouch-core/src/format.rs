//! File formats the editor reads and writes, selected by extension.

use std::path::{Path, PathBuf};

use crate::error::{EditError, Result};

/// Extension appended to save targets that have none.
pub const DEFAULT_EXTENSION: &str = "jpg";

/// Supported on-disk image formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Jpeg,
    Png,
    Bmp,
}

impl ImageFormat {
    /// Pick the format implied by a path's extension (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns `EditError::UnsupportedFormat` for missing or unknown extensions.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        match ext.as_deref() {
            Some("jpg") | Some("jpeg") => Ok(ImageFormat::Jpeg),
            Some("png") => Ok(ImageFormat::Png),
            Some("bmp") => Ok(ImageFormat::Bmp),
            _ => Err(EditError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }

    /// The image crate's equivalent, used to pin the decoder.
    pub fn to_image_format(self) -> image::ImageFormat {
        match self {
            ImageFormat::Jpeg => image::ImageFormat::Jpeg,
            ImageFormat::Png => image::ImageFormat::Png,
            ImageFormat::Bmp => image::ImageFormat::Bmp,
        }
    }
}

/// Append `.jpg` to a save target that has no extension.
pub fn with_default_extension(path: &Path) -> PathBuf {
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension(DEFAULT_EXTENSION)
    }
}
