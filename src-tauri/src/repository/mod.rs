//! Repository Layer
//!
//! Data access abstractions and implementations.

mod traits;
mod db;
mod checklist_repo;
mod worker;

#[cfg(test)]
mod tests;

pub use db::DbState;

#[cfg(test)]
pub use traits::ChecklistRepository;
#[cfg(test)]
pub use db::{open_store, run_migrations, schema_version, table_exists};
#[cfg(test)]
pub use checklist_repo::SqliteChecklistRepository;
#[cfg(test)]
pub use worker::ChecklistWorker;
