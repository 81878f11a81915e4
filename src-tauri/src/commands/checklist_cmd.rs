//! Checklist Commands
//!
//! Tauri commands reading and writing the checked marks.

use tauri::State;
use crate::AppState;

/// Ids of all checked entities, ascending
#[tauri::command]
pub async fn load_checked(state: State<'_, AppState>) -> Result<Vec<u32>, String> {
    let worker = state.db_state.worker().await.map_err(|e| {
        log::warn!("Checklist unavailable, starting empty: {}", e);
        e.to_string()
    })?;

    let ids = worker.load_all().await.map_err(|e| e.to_string())?;
    log::info!("Loaded {} checked marks", ids.len());
    Ok(ids.into_iter().collect())
}

/// Queue an upsert of the mark for `id`
#[tauri::command]
pub async fn mark_checked(state: State<'_, AppState>, id: u32) -> Result<(), String> {
    let worker = state.db_state.worker().await.map_err(|e| e.to_string())?;
    worker.upsert(id).await.map_err(|e| e.to_string())
}

/// Queue a delete of the mark for `id`
#[tauri::command]
pub async fn unmark_checked(state: State<'_, AppState>, id: u32) -> Result<(), String> {
    let worker = state.db_state.worker().await.map_err(|e| e.to_string())?;
    worker.delete(id).await.map_err(|e| e.to_string())
}
