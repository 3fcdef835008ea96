//! Retouch Core - single-image editing engine
//!
//! This crate provides the editing engine behind the Retouch editor: image
//! loading and saving, pixel transforms, a linear undo/redo history and a
//! live-preview coordinator for slider-driven adjustments.
//!
//! # Module Structure
//!
//! - `buffer` - In-memory image representation (8-bit gray or RGB)
//! - `decode` / `encode` - File format I/O (JPEG, PNG, BMP)
//! - `transform` - Pure pixel transforms
//! - `history` - Committed image with undo/redo stacks
//! - `preview` - Ephemeral slider previews and promotion into history
//! - `ops` - Discrete one-shot operations
//! - `session` - The [`Editor`] facade a presentation layer drives

pub mod buffer;
pub mod config;
pub mod decode;
pub mod encode;
pub mod error;
pub mod format;
pub mod history;
pub mod ops;
pub mod preview;
pub mod session;
pub mod transform;

pub use buffer::{ColorDepth, Image};
pub use config::{EditorConfig, FilterType, SliderDefaults};
pub use error::{EditError, ErrorKind, Result};
pub use format::ImageFormat;
pub use history::EditHistory;
pub use ops::Operation;
pub use preview::{PreviewCoordinator, PreviewOp, PreviewParam};
pub use session::Editor;
pub use transform::{FlipAxis, RotateAngle};
