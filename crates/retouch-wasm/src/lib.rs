//! Retouch WASM - WebAssembly bindings for the Retouch editor
//!
//! This crate exposes a retouch-core editing session to JavaScript/TypeScript
//! front ends. The front end owns widgets and drawing; every user intent is
//! forwarded to a [`JsEditor`] callback, and the returned [`JsImage`] is what
//! should be displayed.
//!
//! # Module Structure
//!
//! - `session` - The `JsEditor` callback surface
//! - `types` - WASM-compatible wrapper types for image data
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsEditor } from '@retouch/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const editor = JsEditor.with_config({ history_limit: 50 });
//! const image = editor.on_load(file.name, new Uint8Array(await file.arrayBuffer()));
//! ctx.putImageData(new ImageData(new Uint8ClampedArray(image.rgba()), image.width), 0, 0);
//! ```

use retouch_core::EditError;
use wasm_bindgen::prelude::*;

mod session;
mod types;

// Re-export public types
pub use session::JsEditor;
pub use types::JsImage;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Report an editing error to the browser console and convert it into a
/// JavaScript `Error`.
pub(crate) fn to_js_error(err: EditError) -> JsValue {
    let message = err.to_string();
    web_sys::console::error_1(&JsValue::from_str(&message));
    js_sys::Error::new(&message).into()
}
