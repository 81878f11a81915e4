//! CheckedMark Entity
//!
//! Persisted record meaning "this entity is checked". Presence is the state.

use serde::{Deserialize, Serialize};
use super::entity::Entity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CheckedMark {
    pub id: u32,
}

impl CheckedMark {
    pub fn new(id: u32) -> Self {
        Self { id }
    }
}

impl Entity for CheckedMark {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}
