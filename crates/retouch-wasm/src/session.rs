//! Editor session WASM bindings.
//!
//! [`JsEditor`] owns one editing session and exposes the presentation
//! callbacks to JavaScript. Methods that produce something to display return
//! a [`JsImage`], or `undefined` when the call changed nothing.
//!
//! # Example
//!
//! ```typescript
//! import { JsEditor } from '@retouch/wasm';
//!
//! const editor = new JsEditor();
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! draw(editor.on_load(file.name, bytes));
//!
//! slider.oninput = () => draw(editor.on_preview_change('blur', slider.valueAsNumber));
//! apply.onclick = () => draw(editor.on_promote_preview());
//! rotate.onclick = () => draw(editor.on_commit_op('rotate', ['90']));
//!
//! const jpeg = editor.on_save(undefined);
//! ```

use std::path::Path;

use retouch_core::{Editor, EditorConfig, PreviewOp};
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::to_js_error;
use crate::types::JsImage;

/// Snapshot of the session state, serialized for the UI.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct SessionStatus {
    has_image: bool,
    has_preview: bool,
    undo_depth: usize,
    redo_depth: usize,
    limit: Option<usize>,
    source: Option<String>,
    info: String,
}

/// An editing session for JavaScript.
#[wasm_bindgen]
pub struct JsEditor {
    inner: Editor,
}

#[wasm_bindgen]
impl JsEditor {
    /// Create a session with the default configuration.
    #[wasm_bindgen(constructor)]
    pub fn new() -> JsEditor {
        Self {
            inner: Editor::default(),
        }
    }

    /// Create a session from a plain configuration object.
    ///
    /// Missing fields take their defaults, e.g. `{ history_limit: 20 }`.
    pub fn with_config(config: JsValue) -> Result<JsEditor, JsValue> {
        let config: EditorConfig = serde_wasm_bindgen::from_value(config)
            .map_err(|e| JsValue::from_str(&format!("Invalid editor config: {}", e)))?;
        Ok(Self {
            inner: Editor::new(config),
        })
    }

    /// The active configuration as a plain object.
    pub fn config(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self.inner.config()).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Load an image from file bytes. `name` is used for format detection
    /// and the status bar.
    pub fn on_load(&mut self, name: &str, bytes: &[u8]) -> Result<JsImage, JsValue> {
        self.inner
            .on_load_bytes(Path::new(name), bytes)
            .map(JsImage::from_image)
            .map_err(to_js_error)
    }

    /// Apply and commit a discrete operation, e.g. `('resize', ['640', '480'])`.
    pub fn on_commit_op(&mut self, name: &str, params: Vec<String>) -> Result<Option<JsImage>, JsValue> {
        self.inner
            .on_commit_op(name, params.as_slice())
            .map(|image| image.map(JsImage::from_image))
            .map_err(to_js_error)
    }

    /// Recompute the preview for a slider move (`blur`, `brightness` or `contrast`).
    pub fn on_preview_change(&mut self, name: &str, raw: i32) -> Result<Option<JsImage>, JsValue> {
        self.inner
            .on_preview_change(name, raw)
            .map(|image| image.map(JsImage::from_image))
            .map_err(to_js_error)
    }

    /// Commit the current preview.
    pub fn on_promote_preview(&mut self) -> Option<JsImage> {
        self.inner.on_promote_preview().map(JsImage::from_image)
    }

    /// Drop the current preview and return the committed image.
    pub fn on_discard_preview(&mut self) -> Option<JsImage> {
        self.inner.on_discard_preview().map(JsImage::from_image)
    }

    pub fn on_undo(&mut self) -> Option<JsImage> {
        self.inner.on_undo().map(JsImage::from_image)
    }

    pub fn on_redo(&mut self) -> Option<JsImage> {
        self.inner.on_redo().map(JsImage::from_image)
    }

    /// Encode the committed image for download.
    ///
    /// `name` picks the format by extension (`.jpg` is appended when missing);
    /// without it the configured default file name is used. Returns
    /// `undefined` if no image is loaded.
    pub fn on_save(&mut self, name: Option<String>) -> Result<Option<Vec<u8>>, JsValue> {
        self.inner
            .on_export(name.as_deref().map(Path::new))
            .map(|saved| saved.map(|(_, bytes)| bytes))
            .map_err(to_js_error)
    }

    /// File name of the current source, updated by loads and saves.
    #[wasm_bindgen(getter)]
    pub fn source_name(&self) -> Option<String> {
        self.inner
            .history()
            .source_path()
            .map(|p| p.to_string_lossy().into_owned())
    }

    /// Status bar text, e.g. `"photo.jpg 640 x 480"`.
    pub fn on_status_query(&self) -> String {
        self.inner.on_status_query()
    }

    /// The image to display: the preview if any, else the committed image.
    pub fn active_image(&self) -> Option<JsImage> {
        self.inner.active_image().map(JsImage::from_image)
    }

    #[wasm_bindgen(getter)]
    pub fn can_undo(&self) -> bool {
        self.inner.history().can_undo()
    }

    #[wasm_bindgen(getter)]
    pub fn can_redo(&self) -> bool {
        self.inner.history().can_redo()
    }

    #[wasm_bindgen(getter)]
    pub fn has_preview(&self) -> bool {
        self.inner.preview().is_active()
    }

    /// Initial position for the named slider.
    pub fn slider_default(&self, name: &str) -> Result<i32, JsValue> {
        let op: PreviewOp = name.parse().map_err(to_js_error)?;
        Ok(self.inner.slider_default(op))
    }

    /// History and preview state as a plain object.
    pub fn status(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.session_status()).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl Default for JsEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl JsEditor {
    pub(crate) fn session_status(&self) -> SessionStatus {
        let history = self.inner.history();
        SessionStatus {
            has_image: history.committed().is_some(),
            has_preview: self.inner.preview().is_active(),
            undo_depth: history.undo_depth(),
            redo_depth: history.redo_depth(),
            limit: history.limit(),
            source: self.source_name(),
            info: history.info(),
        }
    }
}
