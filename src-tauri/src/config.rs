//! Application Constants
//!
//! Fixed configuration for the checklist store and the remote catalog.

/// Name of the local store; the SQLite file is `<STORE_NAME>.db`
pub const STORE_NAME: &str = "PokedexDB";

/// Schema version recorded in `PRAGMA user_version`
pub const STORE_VERSION: i32 = 1;

/// Table holding one row per checked entity, keyed by `id`
pub const COLLECTION_NAME: &str = "Checklist";

/// Generation 4 species list
pub const CATALOG_URL: &str = "https://pokeapi.co/api/v2/generation/4";

/// Name used for the log file and the log session header
pub const LOG_NAME: &str = "PokedexChecklist";

/// Queue depth of the persistence worker
pub const WORKER_QUEUE_SIZE: usize = 256;

/// File name of the store inside the app data directory
pub fn store_file_name() -> String {
    format!("{}.db", STORE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_file_name() {
        assert_eq!(store_file_name(), "PokedexDB.db");
    }
}
