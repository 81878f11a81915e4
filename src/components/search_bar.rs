//! Search Bar Component
//!
//! Free-text filter over the catalog. Input is stored lowercased.

use leptos::prelude::*;

use crate::checklist::normalize_search;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn SearchBar() -> impl IntoView {
    let store = use_app_store();

    view! {
        <input
            type="text"
            class="search-input"
            placeholder="Search Pokémon..."
            prop:value=move || store.search().get()
            on:input=move |ev| {
                store.search().set(normalize_search(&event_target_value(&ev)));
            }
        />
    }
}
