//! Checklist Repository Implementation
//!
//! SQLite-backed implementation of `ChecklistRepository`.

use std::collections::BTreeSet;
use std::sync::Arc;
use async_trait::async_trait;
use rusqlite::{Connection, params};
use tokio::sync::Mutex;

use crate::config::COLLECTION_NAME;
use crate::domain::{CheckedMark, DomainError, DomainResult, Entity};
use super::traits::ChecklistRepository;

/// SQLite implementation of the checklist store
pub struct SqliteChecklistRepository {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteChecklistRepository {
    pub fn new(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl ChecklistRepository for SqliteChecklistRepository {
    async fn load_all(&self) -> DomainResult<BTreeSet<u32>> {
        let conn = self.conn.lock().await;

        let mut stmt = conn
            .prepare(&format!("SELECT id FROM {} ORDER BY id", COLLECTION_NAME))
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let ids = stmt
            .query_map([], |row| Ok(CheckedMark::new(row.get(0)?)))
            .map_err(|e| DomainError::Internal(e.to_string()))?
            .map(|mark| mark.map(|m| m.id()))
            .collect::<Result<BTreeSet<u32>, _>>()
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        Ok(ids)
    }

    async fn upsert(&self, id: u32) -> DomainResult<()> {
        let conn = self.conn.lock().await;

        conn.execute(
            &format!("INSERT OR REPLACE INTO {} (id) VALUES (?1)", COLLECTION_NAME),
            params![id],
        )
        .map_err(|e| DomainError::Internal(e.to_string()))?;

        Ok(())
    }

    async fn delete(&self, id: u32) -> DomainResult<()> {
        let conn = self.conn.lock().await;

        conn.execute(
            &format!("DELETE FROM {} WHERE id = ?1", COLLECTION_NAME),
            params![id],
        )
        .map_err(|e| DomainError::Internal(e.to_string()))?;

        Ok(())
    }
}
