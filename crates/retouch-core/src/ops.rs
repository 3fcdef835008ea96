//! Discrete (non-preview) operations.
//!
//! These are applied to the committed image and committed immediately,
//! without a live-preview step.

use crate::buffer::Image;
use crate::config::FilterType;
use crate::error::{EditError, Result};
use crate::history::EditHistory;
use crate::transform::{self, FlipAxis, RotateAngle};

/// A one-shot edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Grayscale,
    EdgeDetect,
    Rotate(RotateAngle),
    Flip(FlipAxis),
    Resize { width: u32, height: u32 },
}

impl Operation {
    /// Build an operation from a name and its text arguments, as sent by a
    /// presentation layer.
    ///
    /// Accepted forms: `grayscale`, `edges`, `rotate <90|180|270>`,
    /// `flip <horizontal|vertical>`, `resize <width> <height>`.
    ///
    /// # Errors
    ///
    /// Returns `EditError::InvalidInput` for unknown names, wrong argument
    /// counts and unparseable arguments.
    pub fn parse<S: AsRef<str>>(name: &str, params: &[S]) -> Result<Self> {
        let name = name.trim().to_ascii_lowercase();
        let args: Vec<&str> = params.iter().map(AsRef::as_ref).collect();

        match (name.as_str(), args.as_slice()) {
            ("grayscale", []) => Ok(Operation::Grayscale),
            ("edges", []) => Ok(Operation::EdgeDetect),
            ("rotate", [angle]) => Ok(Operation::Rotate(angle.parse()?)),
            ("flip", [axis]) => Ok(Operation::Flip(axis.parse()?)),
            ("resize", [width, height]) => {
                let (width, height) = parse_dimensions(width, height)?;
                Ok(Operation::Resize { width, height })
            }
            ("grayscale" | "edges" | "rotate" | "flip" | "resize", _) => Err(EditError::invalid(
                format!("wrong number of arguments for {name}: {}", args.len()),
            )),
            _ => Err(EditError::invalid(format!("unknown operation {name:?}"))),
        }
    }

    /// Compute the edited image. The input is not modified.
    pub fn apply(&self, image: &Image, filter: FilterType) -> Image {
        match *self {
            Operation::Grayscale => transform::to_grayscale(image),
            Operation::EdgeDetect => transform::edge_detect(image),
            Operation::Rotate(angle) => transform::rotate(image, angle),
            Operation::Flip(axis) => transform::flip(image, axis),
            Operation::Resize { width, height } => transform::resize(image, width, height, filter),
        }
    }
}

/// Largest resize target, in RGB bytes. Matches the `image` crate's default
/// decoder allocation limit.
pub const MAX_RESIZE_BYTES: u64 = 512 * 1024 * 1024;

/// Reject resize targets whose RGB buffer would exceed [`MAX_RESIZE_BYTES`].
///
/// # Errors
///
/// Returns `EditError::InvalidInput` for oversized dimensions.
pub fn check_resize_budget(width: u32, height: u32) -> Result<()> {
    let bytes = u64::from(width)
        .checked_mul(u64::from(height))
        .and_then(|pixels| pixels.checked_mul(3));
    match bytes {
        Some(bytes) if bytes <= MAX_RESIZE_BYTES => Ok(()),
        _ => Err(EditError::invalid(format!(
            "{width} x {height} is too large to resize to"
        ))),
    }
}

/// Parse user-entered resize fields.
///
/// Surrounding whitespace is ignored. Both values must be positive integers
/// and the target must fit within [`MAX_RESIZE_BYTES`].
///
/// # Errors
///
/// Returns `EditError::InvalidInput` if either field is not a positive integer
/// or the target is too large.
pub fn parse_dimensions(width: &str, height: &str) -> Result<(u32, u32)> {
    let parse = |label: &str, value: &str| -> Result<u32> {
        match value.trim().parse::<u32>() {
            Ok(0) => Err(EditError::invalid(format!("{label} must be greater than zero"))),
            Ok(v) => Ok(v),
            Err(_) => Err(EditError::invalid(format!(
                "width and height must be numbers ({label} was {value:?})"
            ))),
        }
    };
    let (width, height) = (parse("width", width)?, parse("height", height)?);
    check_resize_budget(width, height)?;
    Ok((width, height))
}

/// Apply `op` to the committed image and commit the result.
///
/// # Errors
///
/// Returns `EditError::NoImageLoaded` if the history is empty and
/// `EditError::InvalidInput` for an oversized resize; nothing is changed in
/// either case.
pub fn apply_operation<'h>(
    history: &'h mut EditHistory,
    op: &Operation,
    filter: FilterType,
) -> Result<&'h Image> {
    if let Operation::Resize { width, height } = *op {
        check_resize_budget(width, height)?;
    }
    let edited = op.apply(history.committed().ok_or(EditError::NoImageLoaded)?, filter);
    tracing::debug!(?op, "Applying operation");
    history.commit(edited);
    history.committed().ok_or(EditError::NoImageLoaded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::ColorDepth;
    use crate::encode::encode_image;
    use crate::error::ErrorKind;
    use crate::format::ImageFormat;
    use image::{Rgb, RgbImage};
    use std::path::Path;

    fn loaded() -> EditHistory {
        let img = Image::Rgb(RgbImage::from_pixel(400, 300, Rgb([30, 60, 90])));
        let bytes = encode_image(&img, ImageFormat::Png, 95).unwrap();
        let mut history = EditHistory::new();
        history.load_from_memory(Path::new("a.png"), &bytes).unwrap();
        history
    }

    #[test]
    fn test_parse_operations() {
        let none: [&str; 0] = [];
        assert_eq!(Operation::parse("grayscale", &none).unwrap(), Operation::Grayscale);
        assert_eq!(Operation::parse("edges", &none).unwrap(), Operation::EdgeDetect);
        assert_eq!(
            Operation::parse("rotate", &["270"]).unwrap(),
            Operation::Rotate(RotateAngle::Deg270)
        );
        assert_eq!(
            Operation::parse("flip", &["vertical"]).unwrap(),
            Operation::Flip(FlipAxis::Vertical)
        );
        assert_eq!(
            Operation::parse("resize", &["400", "300"]).unwrap(),
            Operation::Resize {
                width: 400,
                height: 300
            }
        );
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        let none: [&str; 0] = [];
        assert!(Operation::parse("sharpen", &none).is_err());
        assert!(Operation::parse("rotate", &["45"]).is_err());
        assert!(Operation::parse("rotate", &none).is_err());
        assert!(Operation::parse("grayscale", &["extra"]).is_err());
        assert!(Operation::parse("flip", &["sideways"]).is_err());
    }

    #[test]
    fn test_parse_dimensions() {
        assert_eq!(parse_dimensions("400", "300").unwrap(), (400, 300));
        assert_eq!(parse_dimensions(" 64 ", "32\n").unwrap(), (64, 32));

        let err = parse_dimensions("abc", "300").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InputValidation);
        assert!(parse_dimensions("400", "").is_err());
        assert!(parse_dimensions("-5", "10").is_err());
        assert!(parse_dimensions("0", "10").is_err());
        assert!(parse_dimensions("1.5", "10").is_err());
    }

    #[test]
    fn test_apply_operation_commits() {
        let mut history = loaded();
        let out = apply_operation(&mut history, &Operation::Grayscale, FilterType::Bilinear).unwrap();
        assert_eq!(out.depth(), ColorDepth::Gray);
        assert_eq!(history.undo_depth(), 1);
    }

    #[test]
    fn test_apply_rotate_and_resize() {
        let mut history = loaded();
        let op = Operation::Rotate(RotateAngle::Deg90);
        let out = apply_operation(&mut history, &op, FilterType::Bilinear).unwrap();
        assert_eq!(out.dimensions(), (300, 400));

        let op = Operation::Resize {
            width: 50,
            height: 20,
        };
        let out = apply_operation(&mut history, &op, FilterType::Nearest).unwrap();
        assert_eq!(out.dimensions(), (50, 20));
        assert_eq!(history.undo_depth(), 2);
    }

    #[test]
    fn test_apply_without_image() {
        let mut history = EditHistory::new();
        let result = apply_operation(&mut history, &Operation::EdgeDetect, FilterType::Bilinear);
        assert!(matches!(result, Err(EditError::NoImageLoaded)));
        assert_eq!(history.undo_depth(), 0);
    }

    #[test]
    fn test_oversized_resize_is_rejected() {
        let err = parse_dimensions("4294967295", "4294967295").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InputValidation);
        assert!(parse_dimensions("100000", "100000").is_err());
        // 8192 x 8192 RGB is 192 MiB, within budget.
        assert_eq!(parse_dimensions("8192", "8192").unwrap(), (8192, 8192));
    }

    #[test]
    fn test_oversized_resize_leaves_history_alone() {
        let mut history = loaded();
        let before = history.committed().cloned();

        let op = Operation::Resize {
            width: u32::MAX,
            height: u32::MAX,
        };
        let err = apply_operation(&mut history, &op, FilterType::Bilinear).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InputValidation);
        assert_eq!(history.committed().cloned(), before);
        assert_eq!(history.undo_depth(), 0);
    }

    #[test]
    fn test_check_resize_budget_boundary() {
        // 16384 x 10922 RGB fits in 512 MiB; one more row does not.
        assert!(check_resize_budget(16384, 10922).is_ok());
        assert!(check_resize_budget(16384, 10923).is_err());
        assert!(check_resize_budget(1, 1).is_ok());
    }

    #[test]
    fn test_non_numeric_resize_leaves_history_alone() {
        let mut history = loaded();
        let before = history.committed().cloned();

        let result = Operation::parse("resize", &["abc", "300"])
            .and_then(|op| apply_operation(&mut history, &op, FilterType::Bilinear).map(|_| ()));

        assert_eq!(result.unwrap_err().kind(), ErrorKind::InputValidation);
        assert_eq!(history.committed().cloned(), before);
        assert_eq!(history.undo_depth(), 0);
    }
}
