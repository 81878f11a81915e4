//! Pokemon Grid Component
//!
//! Renders every catalog entry matching the search text, in catalog order.

use leptos::prelude::*;

use crate::checklist::filter_catalog;
use crate::components::PokemonTile;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn PokemonGrid() -> impl IntoView {
    let store = use_app_store();

    let visible = Memo::new(move |_| {
        filter_catalog(&store.catalog().read(), &store.search().read())
    });

    view! {
        <div class="pokemon-grid">
            <For
                each=move || visible.get()
                key=|pokemon| pokemon.id
                children=move |pokemon| view! { <PokemonTile pokemon=pokemon /> }
            />
        </div>
    }
}
