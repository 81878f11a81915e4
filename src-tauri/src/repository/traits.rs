//! Repository Layer - Core Traits
//!
//! Abstract interface of the checklist store.
//! Implementations can use SQLite, in-memory, etc.

use std::collections::BTreeSet;
use async_trait::async_trait;
use crate::domain::DomainResult;

/// Store of checked entity ids.
///
/// A row exists iff the entity is checked. Both writes are idempotent.
#[async_trait]
pub trait ChecklistRepository: Send + Sync {
    /// Ids of all checked entities
    async fn load_all(&self) -> DomainResult<BTreeSet<u32>>;

    /// Mark `id` as checked (insert or replace)
    async fn upsert(&self, id: u32) -> DomainResult<()>;

    /// Remove the mark for `id`; absent ids are not an error
    async fn delete(&self, id: u32) -> DomainResult<()>;
}
