//! UI Components
//!
//! Reusable Leptos components.

mod search_bar;
mod pokemon_tile;
mod pokemon_grid;

pub use search_bar::SearchBar;
pub use pokemon_tile::PokemonTile;
pub use pokemon_grid::PokemonGrid;
