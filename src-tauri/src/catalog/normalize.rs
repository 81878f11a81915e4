//! Species Normalization
//!
//! Maps the `pokemon_species` array of a generation response onto `Pokemon`.

use serde::Deserialize;
use crate::domain::{DomainError, DomainResult, Pokemon};

/// Body of `GET /api/v2/generation/{n}`, reduced to what we read
#[derive(Debug, Deserialize)]
struct GenerationResponse {
    pokemon_species: Vec<SpeciesRef>,
}

/// Named API resource as returned by PokeAPI
#[derive(Debug, Clone, Deserialize)]
pub struct SpeciesRef {
    pub name: String,
    pub url: String,
}

/// Numeric id from the last non-empty path segment of a resource URL
pub fn species_id(url: &str) -> DomainResult<u32> {
    let segment = url
        .split('/')
        .filter(|s| !s.is_empty())
        .last()
        .ok_or_else(|| DomainError::InvalidInput(format!("Empty species url: {:?}", url)))?;

    match segment.parse::<u32>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(DomainError::InvalidInput(format!(
            "Species url does not end with an id: {}",
            url
        ))),
    }
}

/// Uppercase the first character only; the rest is left as is
pub fn capitalize_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Convert species references into catalog entries sorted by id.
///
/// All-or-nothing: one bad url fails the whole list.
pub fn normalize_species(species: Vec<SpeciesRef>) -> DomainResult<Vec<Pokemon>> {
    let mut pokemon = species
        .into_iter()
        .map(|s| Ok(Pokemon::new(species_id(&s.url)?, capitalize_first(&s.name))))
        .collect::<DomainResult<Vec<_>>>()?;

    pokemon.sort_by_key(|p| p.id);
    Ok(pokemon)
}

/// Parse a raw generation response body into the normalized catalog
pub fn parse_generation(body: &str) -> DomainResult<Vec<Pokemon>> {
    let response: GenerationResponse = serde_json::from_str(body)
        .map_err(|e| DomainError::InvalidInput(format!("Malformed generation response: {}", e)))?;
    normalize_species(response.pokemon_species)
}
