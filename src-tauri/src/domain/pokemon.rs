//! Pokemon Entity
//!
//! One catalog entry. Built by the catalog fetcher, never persisted.

use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// A catalog entry shown as one tile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pokemon {
    /// National dex number, taken from the species URL
    pub id: u32,
    /// Display name, first letter capitalized
    pub name: String,
}

impl Pokemon {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self { id, name: name.into() }
    }
}

impl Entity for Pokemon {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}
