//! Catalog Commands
//!
//! Exposes the one-shot catalog fetch to the frontend.

use tauri::State;
use crate::catalog::CatalogOutcome;
use crate::AppState;

/// Fetch and normalize the remote catalog.
///
/// Never fails at the command level; failures come back as
/// `CatalogOutcome::Failed`.
#[tauri::command]
pub async fn fetch_catalog(state: State<'_, AppState>) -> Result<CatalogOutcome, String> {
    Ok(state.catalog.fetch_catalog().await)
}
