//! Domain Layer
//!
//! Contains the domain entities and core abstractions.
//! This layer has NO external dependencies (except serde for serialization).

mod entity;
mod pokemon;
mod checked_mark;

pub use entity::{Entity, DomainError, DomainResult};
pub use pokemon::Pokemon;
pub use checked_mark::CheckedMark;
