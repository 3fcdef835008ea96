//! Editor configuration.
//!
//! Every field has a default matching the stock editor behaviour, so an empty
//! (or partially filled) configuration object deserializes to something usable.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Path written by a plain "save" before any "save as".
pub const DEFAULT_SAVE_PATH: &str = "outputs/edited_image.jpg";

/// JPEG quality used when none is configured.
pub const DEFAULT_JPEG_QUALITY: u8 = 95;

/// Interpolation filter used by the resize operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FilterType {
    /// Nearest neighbor interpolation (fastest, lowest quality).
    Nearest,
    /// Bilinear interpolation (fast, acceptable quality).
    #[default]
    Bilinear,
    /// Lanczos3 interpolation (slower, highest quality).
    Lanczos3,
}

impl FilterType {
    /// Convert to the image crate's FilterType.
    pub fn to_image_filter(self) -> image::imageops::FilterType {
        match self {
            FilterType::Nearest => image::imageops::FilterType::Nearest,
            FilterType::Bilinear => image::imageops::FilterType::Triangle,
            FilterType::Lanczos3 => image::imageops::FilterType::Lanczos3,
        }
    }
}

/// Initial raw slider positions shown by a fresh presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderDefaults {
    pub blur: i32,
    pub brightness: i32,
    /// Raw 10 maps to a gain of 0.2, which dims the preview noticeably.
    pub contrast: i32,
}

impl Default for SliderDefaults {
    fn default() -> Self {
        Self {
            blur: 1,
            brightness: 0,
            contrast: 10,
        }
    }
}

/// Configuration for an editing session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Maximum number of undo snapshots kept. `None` keeps every snapshot.
    pub history_limit: Option<usize>,
    /// Target of the default save action.
    pub default_save_path: PathBuf,
    /// JPEG quality (1-100) for `.jpg`/`.jpeg` targets.
    pub jpeg_quality: u8,
    /// Filter used by the resize operation.
    pub resize_filter: FilterType,
    pub sliders: SliderDefaults,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            history_limit: None,
            default_save_path: PathBuf::from(DEFAULT_SAVE_PATH),
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            resize_filter: FilterType::default(),
            sliders: SliderDefaults::default(),
        }
    }
}

impl EditorConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// JPEG quality clamped to the encoder's valid range.
    pub fn effective_jpeg_quality(&self) -> u8 {
        self.jpeg_quality.clamp(1, 100)
    }
}
