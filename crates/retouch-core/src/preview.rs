//! Live preview of slider-driven adjustments.
//!
//! A preview is recomputed from the committed image on every slider change
//! and is never stacked on a previous preview. It only reaches the edit
//! history through [`PreviewCoordinator::promote`].
//!
//! ## Slider mapping
//! - Blur: kernel size `2 * raw + 1`, raw in 1..=100
//! - Brightness: offset `raw`, raw in -100..=100
//! - Contrast: gain `raw / 50`, raw in 1..=100

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::buffer::Image;
use crate::config::SliderDefaults;
use crate::error::EditError;
use crate::history::EditHistory;
use crate::transform;

/// A slider-driven adjustment that supports live preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewOp {
    Blur,
    Brightness,
    Contrast,
}

impl PreviewOp {
    /// Range of raw slider values. Values outside it are clamped.
    pub fn range(self) -> RangeInclusive<i32> {
        match self {
            PreviewOp::Blur => 1..=100,
            PreviewOp::Brightness => -100..=100,
            PreviewOp::Contrast => 1..=100,
        }
    }

    /// Initial slider position.
    pub fn default_raw(self) -> i32 {
        self.default_raw_in(&SliderDefaults::default())
    }

    /// Initial slider position according to `defaults`.
    pub fn default_raw_in(self, defaults: &SliderDefaults) -> i32 {
        match self {
            PreviewOp::Blur => defaults.blur,
            PreviewOp::Brightness => defaults.brightness,
            PreviewOp::Contrast => defaults.contrast,
        }
    }

    /// Clamp a raw slider value into this operation's range.
    pub fn clamp(self, raw: i32) -> i32 {
        let range = self.range();
        raw.clamp(*range.start(), *range.end())
    }

    /// Map a raw slider value to the transform parameter.
    pub fn param(self, raw: i32) -> PreviewParam {
        let raw = self.clamp(raw);
        match self {
            PreviewOp::Blur => PreviewParam::KernelSize(blur_kernel_size(raw)),
            PreviewOp::Brightness => PreviewParam::Offset(raw),
            PreviewOp::Contrast => PreviewParam::Gain(contrast_gain(raw)),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PreviewOp::Blur => "blur",
            PreviewOp::Brightness => "brightness",
            PreviewOp::Contrast => "contrast",
        }
    }
}

impl FromStr for PreviewOp {
    type Err = EditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "blur" => Ok(PreviewOp::Blur),
            "brightness" => Ok(PreviewOp::Brightness),
            "contrast" => Ok(PreviewOp::Contrast),
            _ => Err(EditError::invalid(format!("unknown preview operation {s:?}"))),
        }
    }
}

impl fmt::Display for PreviewOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Transform parameter derived from a raw slider value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PreviewParam {
    /// Odd blur kernel side length.
    KernelSize(u32),
    /// Per-sample brightness offset.
    Offset(i32),
    /// Per-sample contrast multiplier.
    Gain(f32),
}

impl PreviewParam {
    /// Run the matching transform on `base`.
    pub fn apply(self, base: &Image) -> Image {
        match self {
            PreviewParam::KernelSize(k) => transform::blur(base, k),
            PreviewParam::Offset(offset) => transform::adjust_brightness(base, offset),
            PreviewParam::Gain(gain) => transform::adjust_contrast(base, gain),
        }
    }
}

/// Blur kernel size for a raw slider value: `2 * raw + 1`, always odd.
pub fn blur_kernel_size(raw: i32) -> u32 {
    2 * raw.max(0) as u32 + 1
}

/// Contrast gain for a raw slider value: `raw / 50`, so 50 is the identity.
pub fn contrast_gain(raw: i32) -> f32 {
    raw as f32 / 50.0
}

/// A computed preview and the slider state that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Preview {
    pub op: PreviewOp,
    pub raw: i32,
    pub image: Image,
}

/// Holds at most one ephemeral preview image.
#[derive(Debug, Default)]
pub struct PreviewCoordinator {
    pending: Option<Preview>,
}

impl PreviewCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute the preview from `base` (the committed image), replacing any
    /// previous preview. Returns the new preview image for display.
    pub fn preview(&mut self, base: &Image, op: PreviewOp, raw: i32) -> &Image {
        let raw = op.clamp(raw);
        let image = op.param(raw).apply(base);
        tracing::trace!(op = %op, raw, "Preview recomputed");
        &self.pending.insert(Preview { op, raw, image }).image
    }

    /// Commit the pending preview to `history` and clear it.
    ///
    /// Returns `false` if there was no preview or the history had no image.
    pub fn promote(&mut self, history: &mut EditHistory) -> bool {
        let Some(preview) = self.pending.take() else {
            tracing::debug!("Promote ignored: no preview");
            return false;
        };
        tracing::debug!(op = %preview.op, raw = preview.raw, "Preview promoted");
        history.commit(preview.image)
    }

    /// Drop the pending preview without committing it.
    pub fn discard(&mut self) {
        if self.pending.take().is_some() {
            tracing::debug!("Preview discarded");
        }
    }

    /// The pending preview image, if any.
    pub fn image(&self) -> Option<&Image> {
        self.pending.as_ref().map(|p| &p.image)
    }

    /// The pending preview with its slider state, if any.
    pub fn pending(&self) -> Option<&Preview> {
        self.pending.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.pending.is_some()
    }
}
