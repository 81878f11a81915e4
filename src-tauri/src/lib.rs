//! Pokédex Checklist Backend
//!
//! Layered architecture:
//! - domain: Core entities and errors
//! - catalog: Remote species list fetch and normalization
//! - repository: Checklist store and its background worker
//! - commands: Tauri command handlers

use std::path::PathBuf;
use std::sync::Arc;
use tauri::Manager;

mod config;
mod domain;
mod catalog;
mod repository;
mod commands;

use catalog::CatalogFetcher;
use repository::DbState;

/// Application state shared across commands
pub struct AppState {
    pub db_state: Arc<DbState>,
    pub catalog: CatalogFetcher,
}

/// Get database path from app handle
fn get_db_path(app_handle: &tauri::AppHandle) -> Result<PathBuf, String> {
    let app_dir = app_handle
        .path()
        .app_data_dir()
        .map_err(|e| format!("No app data dir: {}", e))?;
    std::fs::create_dir_all(&app_dir)
        .map_err(|e| format!("Failed to create {}: {}", app_dir.display(), e))?;
    Ok(app_dir.join(config::store_file_name()))
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .setup(|app| {
            // Single instance check - must be first!
            #[cfg(desktop)]
            app.handle().plugin(tauri_plugin_single_instance::init(|_app, _args, _cwd| {
                // Focus the existing window when a new instance tries to start
                if let Some(window) = _app.get_webview_window("main") {
                    let _ = window.set_focus();
                }
            }))?;

            let app_handle = app.handle().clone();

            // Initialize logging
            match app_handle.path().app_log_dir() {
                Ok(log_dir) => {
                    if let Err(e) = rolling_logger::init_logger(log_dir, config::LOG_NAME) {
                        eprintln!("Failed to init rolling logger: {:?}", e);
                    }
                }
                Err(e) => eprintln!("No log dir, logging to stderr only: {}", e),
            }

            // An unusable data dir leaves the checklist unavailable, not the app
            let db_path = get_db_path(&app_handle)
                .map_err(|e| log::error!("Checklist store disabled: {}", e))
                .ok();

            log::info!(
                "[{}] App setup starting, store at {:?}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                db_path
            );

            let db_state = Arc::new(DbState::new(db_path));

            // Manage state IMMEDIATELY
            app.manage(AppState {
                db_state: db_state.clone(),
                catalog: CatalogFetcher::new(config::CATALOG_URL),
            });

            // Open the store in the background; commands open it on demand too
            tauri::async_runtime::spawn(async move {
                match db_state.warm_up().await {
                    Ok(()) => {
                        let _ = rolling_logger::info("Checklist store ready");
                    }
                    Err(e) => {
                        let _ = rolling_logger::error(&format!("Checklist store init failed: {}", e));
                    }
                }
            });

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::fetch_catalog,
            commands::load_checked,
            commands::mark_checked,
            commands::unmark_checked,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
