//! Committed-image history with linear undo/redo.
//!
//! The engine owns the committed image plus two stacks of snapshots:
//! - Undo: committed images replaced by later commits, most recent last
//! - Redo: committed images displaced by undo, most recent last
//!
//! Any new commit (and any load) clears the redo stack, so the history is a
//! single timeline rather than a tree. An optional limit evicts the oldest
//! undo snapshot once the stack grows past it.
//!
//! # Usage
//!
//! ```ignore
//! let mut history = EditHistory::new();
//! history.load(Path::new("photo.png"))?;
//!
//! let gray = transform::to_grayscale(history.committed().unwrap());
//! history.commit(gray);
//!
//! history.undo(); // back to the loaded image
//! history.redo(); // grayscale again
//! ```

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use crate::buffer::Image;
use crate::decode::{decode_image, load_image};
use crate::encode::encode_for_path;
use crate::error::{EditError, Result};
use crate::format::with_default_extension;

/// Status text shown when nothing is loaded.
pub const NO_IMAGE_STATUS: &str = "No image loaded";

/// Basename shown for an image that has no source path.
const UNTITLED: &str = "Untitled";

/// The document being edited and its undo/redo history.
#[derive(Debug, Default)]
pub struct EditHistory {
    committed: Option<Image>,
    undo_stack: VecDeque<Image>,
    redo_stack: Vec<Image>,
    source_path: Option<PathBuf>,
    /// Maximum undo depth. `None` means unbounded.
    limit: Option<usize>,
}

impl EditHistory {
    /// Create an empty, unbounded history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty history keeping at most `limit` undo snapshots.
    pub fn with_limit(limit: Option<usize>) -> Self {
        Self {
            limit,
            ..Self::default()
        }
    }

    /// Load an image file, discarding the current document and both stacks.
    ///
    /// # Errors
    ///
    /// Returns an I/O-class [`EditError`] if the file cannot be read or
    /// decoded. The current document is left untouched in that case.
    pub fn load(&mut self, path: &Path) -> Result<&Image> {
        let image = load_image(path)?;
        Ok(self.replace(path, image))
    }

    /// Like [`load`](Self::load), decoding file bytes already in memory.
    /// `name` becomes the source path.
    pub fn load_from_memory(&mut self, name: &Path, bytes: &[u8]) -> Result<&Image> {
        let image = decode_image(name, bytes)?;
        Ok(self.replace(name, image))
    }

    fn replace(&mut self, path: &Path, image: Image) -> &Image {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.source_path = Some(path.to_path_buf());
        tracing::info!(
            path = %path.display(),
            width = image.width(),
            height = image.height(),
            "Image loaded"
        );
        self.committed.insert(image)
    }

    /// Make `image` the committed image, snapshotting the previous one onto
    /// the undo stack and clearing the redo stack.
    ///
    /// Returns `false` without changing anything if no image is loaded.
    pub fn commit(&mut self, image: Image) -> bool {
        let Some(current) = self.committed.as_mut() else {
            tracing::debug!("Commit ignored: no image loaded");
            return false;
        };

        let previous = std::mem::replace(current, image);
        self.redo_stack.clear();
        self.push_undo(previous);

        tracing::debug!(undo_depth = self.undo_stack.len(), "Edit committed");
        true
    }

    /// Step back one commit. Returns the restored image, or `None` if there
    /// is nothing to undo.
    pub fn undo(&mut self) -> Option<&Image> {
        let current = self.committed.as_mut()?;
        let previous = self.undo_stack.pop_back()?;
        self.redo_stack.push(std::mem::replace(current, previous));

        tracing::debug!(
            undo_depth = self.undo_stack.len(),
            redo_depth = self.redo_stack.len(),
            "Undo"
        );
        self.committed.as_ref()
    }

    /// Re-apply the last undone commit. Returns the restored image, or `None`
    /// if there is nothing to redo.
    pub fn redo(&mut self) -> Option<&Image> {
        let current = self.committed.as_mut()?;
        let next = self.redo_stack.pop()?;
        let displaced = std::mem::replace(current, next);
        self.push_undo(displaced);

        tracing::debug!(
            undo_depth = self.undo_stack.len(),
            redo_depth = self.redo_stack.len(),
            "Redo"
        );
        self.committed.as_ref()
    }

    fn push_undo(&mut self, snapshot: Image) {
        self.undo_stack.push_back(snapshot);
        if let Some(limit) = self.limit {
            while self.undo_stack.len() > limit {
                self.undo_stack.pop_front();
                tracing::debug!(limit, "Oldest undo snapshot evicted");
            }
        }
    }

    /// Encode the committed image for saving.
    ///
    /// The target is `path` if given, otherwise the current source path; a
    /// target without an extension gets `.jpg`. On success the target becomes
    /// the new source path and is returned with the encoded bytes.
    ///
    /// # Errors
    ///
    /// Returns `EditError::NoImageLoaded` if nothing is committed, or an
    /// I/O-class error if the target format is unsupported or encoding fails.
    pub fn export(&mut self, path: Option<&Path>, quality: u8) -> Result<(PathBuf, Vec<u8>)> {
        let image = self.committed.as_ref().ok_or(EditError::NoImageLoaded)?;
        let target = path
            .or(self.source_path.as_deref())
            .map(with_default_extension)
            .ok_or(EditError::NoImageLoaded)?;

        let bytes = encode_for_path(&target, image, quality)?;
        self.source_path = Some(target.clone());
        Ok((target, bytes))
    }

    /// Write the committed image to disk (never a pending preview).
    ///
    /// See [`export`](Self::export) for how the target is chosen. The source
    /// path only changes if the write succeeds.
    pub fn save(&mut self, path: Option<&Path>, quality: u8) -> Result<PathBuf> {
        let previous = self.source_path.clone();
        let (target, bytes) = self.export(path, quality)?;

        if let Err(source) = std::fs::write(&target, bytes) {
            self.source_path = previous;
            return Err(EditError::Write {
                path: target,
                source,
            });
        }

        tracing::info!(path = %target.display(), "Image saved");
        Ok(target)
    }

    /// One-line status: `"<basename> <width> x <height>"`, or
    /// `"No image loaded"`.
    pub fn info(&self) -> String {
        let Some(image) = &self.committed else {
            return NO_IMAGE_STATUS.to_string();
        };
        let name = self
            .source_path
            .as_deref()
            .and_then(Path::file_name)
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| UNTITLED.to_string());
        format!("{} {} x {}", name, image.width(), image.height())
    }

    /// The committed image, if one is loaded.
    pub fn committed(&self) -> Option<&Image> {
        self.committed.as_ref()
    }

    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }
}
