//! Pokédex Checklist Frontend App
//!
//! Single view: title, search box, progress line and the tile grid.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::checklist::checked_in_catalog;
use crate::commands;
use crate::components::{PokemonGrid, SearchBar};
use crate::models::CatalogOutcome;
use crate::store::{store_apply_loaded, AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());

    // Provide store to all children
    provide_context(store);

    // Persisted marks and the catalog load independently; neither blocks
    // the first render.
    Effect::new(move |_| {
        spawn_local(async move {
            match commands::load_checked().await {
                Ok(ids) => {
                    web_sys::console::log_1(&format!("[APP] Loaded {} checked marks", ids.len()).into());
                    store_apply_loaded(&store, ids);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[APP] Checklist unavailable: {}", e).into());
                    store.checklist().write().mark_load_failed();
                }
            }
        });

        spawn_local(async move {
            match commands::fetch_catalog().await {
                Ok(CatalogOutcome::Loaded { pokemon }) => {
                    web_sys::console::log_1(&format!("[APP] Loaded {} pokemon", pokemon.len()).into());
                    store.catalog().set(pokemon);
                }
                Ok(CatalogOutcome::Failed { reason }) => {
                    web_sys::console::error_1(&format!("[APP] Failed to load catalog: {}", reason).into());
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[APP] Failed to load catalog: {}", e).into());
                }
            }
        });
    });

    view! {
        <div class="app-layout">
            <h1 class="app-title">"Pokédex Checklist"</h1>

            <SearchBar />

            <p class="checked-count">
                {move || {
                    let catalog = store.catalog().read();
                    let checked = checked_in_catalog(&catalog, &store.checklist().read());
                    format!("{} / {} checked", checked, catalog.len())
                }}
            </p>

            <PokemonGrid />
        </div>
    }
}
