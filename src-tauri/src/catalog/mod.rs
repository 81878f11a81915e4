//! Catalog Layer
//!
//! Fetches the remote species list and turns it into `Pokemon` entries.

mod normalize;
mod fetcher;

use serde::{Deserialize, Serialize};
use crate::domain::Pokemon;

pub use fetcher::CatalogFetcher;

/// Result of the one-shot catalog fetch, as handed to the frontend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum CatalogOutcome {
    Loaded { pokemon: Vec<Pokemon> },
    Failed { reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_wire_format() {
        let loaded = CatalogOutcome::Loaded { pokemon: vec![Pokemon::new(387, "Turtwig")] };
        assert_eq!(
            serde_json::to_value(&loaded).unwrap(),
            serde_json::json!({ "status": "loaded", "pokemon": [{ "id": 387, "name": "Turtwig" }] })
        );

        let failed = CatalogOutcome::Failed { reason: "offline".to_string() };
        assert_eq!(
            serde_json::to_value(&failed).unwrap(),
            serde_json::json!({ "status": "failed", "reason": "offline" })
        );
    }
}
