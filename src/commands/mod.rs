//! Tauri Command Wrappers
//!
//! Frontend bindings to backend commands, organized by domain.

mod catalog;
mod checklist;

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"], catch)]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

/// Rejections from `invoke` carry the backend's error string
fn js_error(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

// Re-export all public items
pub use catalog::*;
pub use checklist::*;
