//! Database Connection and Setup
//!
//! Opens the SQLite file backing the checklist and runs migrations.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use rusqlite::Connection;
use tokio::sync::{Mutex, OnceCell};

use crate::config::{COLLECTION_NAME, STORE_VERSION};
use crate::domain::{DomainError, DomainResult};
use super::checklist_repo::SqliteChecklistRepository;
use super::worker::ChecklistWorker;

/// Lazily opened store, shared by all commands.
///
/// The worker is created on first use and then reused for the whole
/// process. If opening fails, the next call tries again. Without a path
/// (no app data dir) the store is permanently unavailable.
pub struct DbState {
    db_path: Option<PathBuf>,
    worker: OnceCell<ChecklistWorker>,
}

impl DbState {
    pub fn new(db_path: Option<PathBuf>) -> Self {
        Self {
            db_path,
            worker: OnceCell::new(),
        }
    }

    /// Get the persistence worker, opening the store if necessary
    pub async fn worker(&self) -> DomainResult<&ChecklistWorker> {
        let db_path = self
            .db_path
            .clone()
            .ok_or_else(|| DomainError::Unavailable("No data directory for the checklist".to_string()))?;

        self.worker
            .get_or_try_init(|| async move {
                let path = db_path.clone();
                let conn = tokio::task::spawn_blocking(move || open_store(&path))
                    .await
                    .map_err(|e| DomainError::Internal(format!("Open task failed: {}", e)))??;

                log::info!("Checklist store opened at {}", db_path.display());
                let repo = SqliteChecklistRepository::new(Arc::new(Mutex::new(conn)));
                Ok::<_, DomainError>(ChecklistWorker::spawn(repo))
            })
            .await
    }

    /// Open the store ahead of the first command
    pub async fn warm_up(&self) -> DomainResult<()> {
        self.worker().await.map(|_| ())
    }
}

/// Open the store file and make sure the checklist table exists
pub fn open_store(db_path: &Path) -> DomainResult<Connection> {
    let conn = Connection::open(db_path).map_err(|e| {
        DomainError::Unavailable(format!("Failed to open {}: {}", db_path.display(), e))
    })?;

    let created = !table_exists(&conn, COLLECTION_NAME)?;
    run_migrations(&conn)?;
    if created {
        log::info!("Created {} collection in {}", COLLECTION_NAME, db_path.display());
    }
    Ok(conn)
}

/// Check if a table exists
pub fn table_exists(conn: &Connection, table: &str) -> DomainResult<bool> {
    let count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
            [table],
            |row| row.get(0),
        )
        .map_err(|e| DomainError::Internal(e.to_string()))?;
    Ok(count > 0)
}

/// Current schema version (`PRAGMA user_version`)
pub fn schema_version(conn: &Connection) -> DomainResult<i32> {
    conn.query_row("PRAGMA user_version", [], |row| row.get(0))
        .map_err(|e| DomainError::Internal(e.to_string()))
}

/// Run database migrations. Safe to call any number of times.
pub fn run_migrations(conn: &Connection) -> DomainResult<()> {
    conn.execute_batch(&format!(
        "CREATE TABLE IF NOT EXISTS {} (id INTEGER PRIMARY KEY NOT NULL)",
        COLLECTION_NAME
    ))
    .map_err(|e| DomainError::Unavailable(format!("Failed to create {}: {}", COLLECTION_NAME, e)))?;

    if schema_version(conn)? < STORE_VERSION {
        conn.pragma_update(None, "user_version", STORE_VERSION)
            .map_err(|e| DomainError::Internal(e.to_string()))?;
    }

    Ok(())
}
