//! Frontend Constants

/// Official artwork, keyed by national dex number
pub const ARTWORK_URL_TEMPLATE: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/official-artwork/{id}.png";

pub fn artwork_url(id: u32) -> String {
    ARTWORK_URL_TEMPLATE.replace("{id}", &id.to_string())
}
