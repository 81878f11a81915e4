//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::checklist::ChecklistState;
use crate::commands;
use crate::models::Pokemon;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Catalog sorted by id; empty until (or unless) the fetch succeeds
    pub catalog: Vec<Pokemon>,
    /// Checked ids
    pub checklist: ChecklistState,
    /// Lowercased search text
    pub search: String,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Toggle `id` in memory and send the matching write in the background.
///
/// The in-memory change is not rolled back if the write fails.
pub fn store_toggle_pokemon(store: &AppStore, id: u32) {
    let action = store.checklist().write().toggle(id);

    spawn_local(async move {
        if let Err(e) = commands::persist(action).await {
            web_sys::console::error_1(&format!("[CHECKLIST] Failed to persist {:?}: {}", action, e).into());
        }
    });
}

/// Replace the checked-set with the persisted marks
pub fn store_apply_loaded(store: &AppStore, ids: Vec<u32>) {
    store.checklist().write().apply_loaded(ids);
}
