//! Commands Layer
//!
//! Tauri command handlers that bridge frontend to backend services.

mod catalog_cmd;
mod checklist_cmd;

pub use catalog_cmd::*;
pub use checklist_cmd::*;
