//! Catalog Commands
//!
//! Frontend binding for the one-shot catalog fetch.

use wasm_bindgen::prelude::*;
use crate::models::CatalogOutcome;
use super::{invoke, js_error};

pub async fn fetch_catalog() -> Result<CatalogOutcome, String> {
    let result = invoke("fetch_catalog", JsValue::NULL).await.map_err(js_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}
