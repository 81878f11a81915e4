//! Checklist Commands
//!
//! Frontend bindings for reading and writing checked marks.

use wasm_bindgen::prelude::*;
use serde::Serialize;
use crate::checklist::PersistAction;
use super::{invoke, js_error};

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct IdArgs {
    id: u32,
}

// ========================
// Commands
// ========================

pub async fn load_checked() -> Result<Vec<u32>, String> {
    let result = invoke("load_checked", JsValue::NULL).await.map_err(js_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn mark_checked(id: u32) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&IdArgs { id }).map_err(|e| e.to_string())?;
    invoke("mark_checked", js_args).await.map_err(js_error)?;
    Ok(())
}

pub async fn unmark_checked(id: u32) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&IdArgs { id }).map_err(|e| e.to_string())?;
    invoke("unmark_checked", js_args).await.map_err(js_error)?;
    Ok(())
}

/// Send the write derived from a toggle
pub async fn persist(action: PersistAction) -> Result<(), String> {
    match action {
        PersistAction::Upsert(id) => mark_checked(id).await,
        PersistAction::Delete(id) => unmark_checked(id).await,
    }
}
