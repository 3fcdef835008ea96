//! EXIF orientation for JPEG sources.
//!
//! Cameras store the sensor image as captured and record how to turn it in
//! tag 0x0112. Each of the eight tag values is expressed here as an optional
//! horizontal mirror followed by an optional clockwise quarter-turn, so it can
//! be applied with the editor's own transforms.

use std::io::Cursor;

use exif::{In, Reader, Tag};

use crate::buffer::Image;
use crate::transform::{self, FlipAxis, RotateAngle};

/// Correction needed to display a decoded image upright.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Orientation {
    /// Mirror left-right before rotating.
    pub mirror: bool,
    /// Clockwise rotation applied after the mirror.
    pub rotate: Option<RotateAngle>,
}

impl Orientation {
    pub const UPRIGHT: Orientation = Orientation {
        mirror: false,
        rotate: None,
    };

    /// Map an EXIF orientation value (1-8). Unknown values mean upright.
    pub fn from_exif(value: u32) -> Self {
        let (mirror, rotate) = match value {
            2 => (true, None),
            3 => (false, Some(RotateAngle::Deg180)),
            4 => (true, Some(RotateAngle::Deg180)),
            5 => (true, Some(RotateAngle::Deg270)),
            6 => (false, Some(RotateAngle::Deg90)),
            7 => (true, Some(RotateAngle::Deg90)),
            8 => (false, Some(RotateAngle::Deg270)),
            _ => (false, None),
        };
        Self { mirror, rotate }
    }

    pub fn is_upright(self) -> bool {
        self == Self::UPRIGHT
    }
}

/// Read the orientation tag from encoded file bytes.
///
/// Files without EXIF data, or without the tag, are upright.
pub fn read_orientation(bytes: &[u8]) -> Orientation {
    let Ok(exif) = Reader::new().read_from_container(&mut Cursor::new(bytes)) else {
        return Orientation::UPRIGHT;
    };

    exif.get_field(Tag::Orientation, In::PRIMARY)
        .and_then(|field| field.value.get_uint(0))
        .map(Orientation::from_exif)
        .unwrap_or_default()
}

/// Turn a decoded image upright.
pub fn apply_orientation(image: Image, orientation: Orientation) -> Image {
    let image = if orientation.mirror {
        transform::flip(&image, FlipAxis::Horizontal)
    } else {
        image
    };
    match orientation.rotate {
        Some(angle) => transform::rotate(&image, angle),
        None => image,
    }
}
