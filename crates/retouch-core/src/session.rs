//! The editor session: one entry point per presentation-layer callback.
//!
//! [`Editor`] ties the edit history, the preview coordinator and the
//! configuration together. Calls that have nothing to act on (no image
//! loaded, nothing to undo, no preview) return `None`/`Ok(None)` rather than
//! failing, so a UI can forward user intents without pre-checking state.
//!
//! The image a UI should display is always [`Editor::active_image`]: the
//! pending preview if there is one, otherwise the committed image.

use std::path::{Path, PathBuf};

use crate::buffer::Image;
use crate::config::EditorConfig;
use crate::error::{EditError, Result};
use crate::history::EditHistory;
use crate::ops::{apply_operation, Operation};
use crate::preview::{PreviewCoordinator, PreviewOp};

/// An interactive editing session.
#[derive(Debug)]
pub struct Editor {
    config: EditorConfig,
    history: EditHistory,
    preview: PreviewCoordinator,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl Editor {
    pub fn new(config: EditorConfig) -> Self {
        Self {
            history: EditHistory::with_limit(config.history_limit),
            preview: PreviewCoordinator::new(),
            config,
        }
    }

    /// Open an image file, resetting history and any preview.
    ///
    /// # Errors
    ///
    /// I/O-class errors from reading or decoding; the session is unchanged.
    pub fn on_load(&mut self, path: &Path) -> Result<&Image> {
        let image = self.history.load(path)?;
        self.preview.discard();
        Ok(image)
    }

    /// Open an image from file bytes already in memory (e.g. a browser upload).
    pub fn on_load_bytes(&mut self, name: &Path, bytes: &[u8]) -> Result<&Image> {
        let image = self.history.load_from_memory(name, bytes)?;
        self.preview.discard();
        Ok(image)
    }

    /// Apply a discrete operation by name and commit it.
    ///
    /// Returns the new committed image, or `Ok(None)` if no image is loaded.
    ///
    /// # Errors
    ///
    /// `EditError::InvalidInput` for unknown operations or bad arguments
    /// (e.g. non-numeric resize fields). The committed image is unchanged.
    pub fn on_commit_op<S: AsRef<str>>(&mut self, name: &str, params: &[S]) -> Result<Option<&Image>> {
        let op = Operation::parse(name, params)?;
        self.commit_op(&op)
    }

    /// Apply an already-parsed discrete operation and commit it.
    pub fn commit_op(&mut self, op: &Operation) -> Result<Option<&Image>> {
        // A pending preview was derived from the image about to be replaced.
        self.preview.discard();
        match apply_operation(&mut self.history, op, self.config.resize_filter) {
            Ok(image) => Ok(Some(image)),
            Err(EditError::NoImageLoaded) => {
                tracing::debug!(?op, "Operation ignored: no image loaded");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Recompute the preview for a slider change by operation name.
    ///
    /// # Errors
    ///
    /// `EditError::InvalidInput` for an unknown operation name.
    pub fn on_preview_change(&mut self, name: &str, raw: i32) -> Result<Option<&Image>> {
        let op: PreviewOp = name.parse()?;
        Ok(self.preview_change(op, raw))
    }

    /// Recompute the preview for a slider change. Returns `None` if no image
    /// is loaded.
    pub fn preview_change(&mut self, op: PreviewOp, raw: i32) -> Option<&Image> {
        let base = self.history.committed()?;
        Some(self.preview.preview(base, op, raw))
    }

    /// Commit the pending preview. Returns the new committed image, or
    /// `None` if there was nothing to promote.
    pub fn on_promote_preview(&mut self) -> Option<&Image> {
        if self.preview.promote(&mut self.history) {
            self.history.committed()
        } else {
            None
        }
    }

    /// Drop the pending preview. Returns the committed image to display.
    pub fn on_discard_preview(&mut self) -> Option<&Image> {
        self.preview.discard();
        self.history.committed()
    }

    /// Undo the last commit. Returns the restored image, or `None` if there
    /// was nothing to undo.
    pub fn on_undo(&mut self) -> Option<&Image> {
        if !self.history.can_undo() {
            return None;
        }
        self.preview.discard();
        self.history.undo()
    }

    /// Redo the last undone commit. Returns the restored image, or `None` if
    /// there was nothing to redo.
    pub fn on_redo(&mut self) -> Option<&Image> {
        if !self.history.can_redo() {
            return None;
        }
        self.preview.discard();
        self.history.redo()
    }

    /// Save the committed image.
    ///
    /// Without a path this is the default "save" action: it writes to the
    /// configured default path, creating its directory if needed. With a path
    /// it is "save as". Returns the written path, or `Ok(None)` if no image is
    /// loaded.
    ///
    /// # Errors
    ///
    /// I/O-class errors from encoding or writing.
    pub fn on_save(&mut self, path: Option<&Path>) -> Result<Option<PathBuf>> {
        if self.history.committed().is_none() {
            tracing::debug!("Save ignored: no image loaded");
            return Ok(None);
        }

        let target = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let target = self.config.default_save_path.clone();
                if let Some(dir) = target.parent().filter(|d| !d.as_os_str().is_empty()) {
                    std::fs::create_dir_all(dir).map_err(|source| EditError::Write {
                        path: dir.to_path_buf(),
                        source,
                    })?;
                }
                target
            }
        };

        self.history
            .save(Some(target.as_path()), self.config.effective_jpeg_quality())
            .map(Some)
    }

    /// Encode the committed image without touching the filesystem.
    ///
    /// `name` picks the format and becomes the source path; without it the
    /// default save path's file name is used. Returns `Ok(None)` if no image
    /// is loaded.
    pub fn on_export(&mut self, name: Option<&Path>) -> Result<Option<(PathBuf, Vec<u8>)>> {
        if self.history.committed().is_none() {
            return Ok(None);
        }
        let default_name = self
            .config
            .default_save_path
            .file_name()
            .map(PathBuf::from)
            .unwrap_or_else(|| self.config.default_save_path.clone());
        let target = name.map(Path::to_path_buf).unwrap_or(default_name);

        self.history
            .export(Some(target.as_path()), self.config.effective_jpeg_quality())
            .map(Some)
    }

    /// Status bar text.
    pub fn on_status_query(&self) -> String {
        self.history.info()
    }

    /// What the UI should display: the preview if present, else the committed image.
    pub fn active_image(&self) -> Option<&Image> {
        self.preview.image().or_else(|| self.history.committed())
    }

    pub fn history(&self) -> &EditHistory {
        &self.history
    }

    pub fn preview(&self) -> &PreviewCoordinator {
        &self.preview
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Initial raw value for a preview slider.
    pub fn slider_default(&self, op: PreviewOp) -> i32 {
        op.default_raw_in(&self.config.sliders)
    }
}
