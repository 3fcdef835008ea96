//! Error types for editor operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading, editing or saving an image.
#[derive(Debug, Error)]
pub enum EditError {
    /// The source file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file was read but its contents are not a decodable image.
    #[error("failed to decode {path}: {message}")]
    Decode { path: PathBuf, message: String },

    /// The file extension is not one of the supported image formats.
    #[error("unsupported image format for {path} (expected .jpg, .jpeg, .png or .bmp)")]
    UnsupportedFormat { path: PathBuf },

    /// Encoding the committed image failed.
    #[error("failed to encode {path}: {message}")]
    Encode { path: PathBuf, message: String },

    /// The encoded image could not be written to disk.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A user-supplied value was rejected.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An edit was requested before any image was loaded.
    #[error("no image loaded")]
    NoImageLoaded,
}

/// Coarse classification of an [`EditError`], used by presentation layers to
/// decide how to report it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// File could not be read, decoded, encoded or written.
    Io,
    /// A user-entered value failed validation.
    InputValidation,
    /// The operation needs a loaded image. Never shown to the user.
    NoImageLoaded,
}

impl EditError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            EditError::Read { .. }
            | EditError::Decode { .. }
            | EditError::UnsupportedFormat { .. }
            | EditError::Encode { .. }
            | EditError::Write { .. } => ErrorKind::Io,
            EditError::InvalidInput(_) => ErrorKind::InputValidation,
            EditError::NoImageLoaded => ErrorKind::NoImageLoaded,
        }
    }

    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        EditError::InvalidInput(message.into())
    }
}

/// Result type alias for editor operations.
pub type Result<T> = std::result::Result<T, EditError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        let err = EditError::UnsupportedFormat {
            path: PathBuf::from("a.gif"),
        };
        assert_eq!(err.kind(), ErrorKind::Io);
        assert_eq!(EditError::invalid("x").kind(), ErrorKind::InputValidation);
        assert_eq!(EditError::NoImageLoaded.kind(), ErrorKind::NoImageLoaded);
    }

    #[test]
    fn test_error_display() {
        let err = EditError::invalid("width must be a number");
        assert_eq!(err.to_string(), "invalid input: width must be a number");

        let err = EditError::Decode {
            path: PathBuf::from("photo.png"),
            message: "truncated".to_string(),
        };
        assert_eq!(err.to_string(), "failed to decode photo.png: truncated");
    }
}
