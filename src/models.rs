//! Frontend Models
//!
//! Data structures matching backend entities.

use serde::{Deserialize, Serialize};

/// Catalog entry (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
}

/// Result of the catalog fetch (matches backend)
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
    fn test_outcome_from_backend_json() {
        let loaded: CatalogOutcome = serde_json::from_str(
            r#"{ "status": "loaded", "pokemon": [{ "id": 387, "name": "Turtwig" }] }"#,
        )
        .unwrap();
        assert_eq!(
            loaded,
            CatalogOutcome::Loaded {
                pokemon: vec![Pokemon { id: 387, name: "Turtwig".to_string() }]
            }
        );

        let failed: CatalogOutcome =
            serde_json::from_str(r#"{ "status": "failed", "reason": "offline" }"#).unwrap();
        assert_eq!(failed, CatalogOutcome::Failed { reason: "offline".to_string() });
    }
}
