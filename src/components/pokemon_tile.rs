//! Pokemon Tile Component
//!
//! One grid cell: artwork, name and checkbox. Clicking anywhere toggles.

use leptos::prelude::*;

use crate::checklist::tile_class;
use crate::config::artwork_url;
use crate::models::Pokemon;
use crate::store::{store_toggle_pokemon, use_app_store, AppStateStoreFields};

#[component]
pub fn PokemonTile(pokemon: Pokemon) -> impl IntoView {
    let store = use_app_store();

    let id = pokemon.id;
    let name = pokemon.name;
    let is_checked = move || store.checklist().read().is_checked(id);

    view! {
        <div
            class=move || tile_class(is_checked())
            on:click=move |_| store_toggle_pokemon(&store, id)
        >
            <img class="pokemon-artwork" src=artwork_url(id) alt=name.clone() />
            <span class="pokemon-name">{name}</span>

            // Checkbox toggles on its own; keep the click away from the tile
            <input
                type="checkbox"
                class="pokemon-check"
                prop:checked=is_checked
                on:click=move |ev| {
                    ev.stop_propagation();
                    store_toggle_pokemon(&store, id);
                }
            />
        </div>
    }
}
