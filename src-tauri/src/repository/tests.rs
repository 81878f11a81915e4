//! Repository Integration Tests
//!
//! Tests for the checklist store and its worker with in-memory SQLite.

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::path::{Path, PathBuf};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use async_trait::async_trait;
    use tokio::sync::Mutex;

    use crate::config::{COLLECTION_NAME, STORE_VERSION};
    use crate::domain::{DomainError, DomainResult};
    use crate::repository::{
        open_store, run_migrations, schema_version, table_exists, ChecklistRepository,
        ChecklistWorker, DbState, SqliteChecklistRepository,
    };

    fn setup_test_repo() -> SqliteChecklistRepository {
        // Use in-memory database for tests
        let conn = open_store(Path::new(":memory:")).expect("Failed to open test DB");
        SqliteChecklistRepository::new(Arc::new(Mutex::new(conn)))
    }

    fn ids(values: &[u32]) -> BTreeSet<u32> {
        values.iter().copied().collect()
    }

    #[tokio::test]
    async fn test_open_creates_collection() {
        let conn = open_store(Path::new(":memory:")).unwrap();
        assert!(table_exists(&conn, COLLECTION_NAME).unwrap());
        assert_eq!(schema_version(&conn).unwrap(), STORE_VERSION);
    }

    #[tokio::test]
    async fn test_migrations_are_idempotent() {
        let conn = open_store(Path::new(":memory:")).unwrap();
        conn.execute("INSERT INTO Checklist (id) VALUES (7)", []).unwrap();

        run_migrations(&conn).expect("second run");
        run_migrations(&conn).expect("third run");

        let count: i64 = conn.query_row("SELECT COUNT(*) FROM Checklist", [], |r| r.get(0)).unwrap();
        assert_eq!(count, 1);
        assert_eq!(schema_version(&conn).unwrap(), STORE_VERSION);
    }

    #[tokio::test]
    async fn test_empty_store_loads_nothing() {
        let repo = setup_test_repo();
        assert!(repo.load_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_upsert_and_load_all() {
        let repo = setup_test_repo();

        repo.upsert(390).await.unwrap();
        repo.upsert(387).await.unwrap();

        assert_eq!(repo.load_all().await.unwrap(), ids(&[387, 390]));
        assert!(repo.load_all().await.unwrap().contains(&387));
        assert!(!repo.load_all().await.unwrap().contains(&1));
    }

    #[tokio::test]
    async fn test_upsert_is_idempotent() {
        let repo = setup_test_repo();

        repo.upsert(1).await.unwrap();
        repo.upsert(1).await.unwrap();

        assert_eq!(repo.load_all().await.unwrap(), ids(&[1]));
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let repo = setup_test_repo();
        repo.upsert(2).await.unwrap();

        repo.delete(1).await.expect("deleting an absent id is fine");
        assert_eq!(repo.load_all().await.unwrap(), ids(&[2]));

        repo.delete(2).await.unwrap();
        repo.delete(2).await.unwrap();
        assert!(repo.load_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_marks_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("PokedexDB.db");

        {
            let conn = open_store(&path).unwrap();
            let repo = SqliteChecklistRepository::new(Arc::new(Mutex::new(conn)));
            repo.upsert(387).await.unwrap();
            repo.upsert(493).await.unwrap();
            repo.delete(387).await.unwrap();
        }

        let conn = open_store(&path).unwrap();
        let repo = SqliteChecklistRepository::new(Arc::new(Mutex::new(conn)));
        assert_eq!(repo.load_all().await.unwrap(), ids(&[493]));
    }

    // ========================
    // Worker
    // ========================

    #[tokio::test]
    async fn test_worker_applies_commands_in_order() {
        let worker = ChecklistWorker::spawn(setup_test_repo());

        worker.upsert(1).await.unwrap();
        worker.delete(1).await.unwrap();
        worker.upsert(2).await.unwrap();
        worker.upsert(1).await.unwrap();
        worker.delete(2).await.unwrap();

        assert_eq!(worker.load_all().await.unwrap(), ids(&[1]));
    }

    #[tokio::test]
    async fn test_double_toggle_restores_store() {
        let worker = ChecklistWorker::spawn(setup_test_repo());
        worker.upsert(5).await.unwrap();
        let before = worker.load_all().await.unwrap();

        worker.upsert(9).await.unwrap();
        worker.delete(9).await.unwrap();

        assert_eq!(worker.load_all().await.unwrap(), before);
    }

    /// Repository whose writes always fail
    struct BrokenRepository {
        attempts: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl ChecklistRepository for BrokenRepository {
        async fn load_all(&self) -> DomainResult<BTreeSet<u32>> {
            Ok(BTreeSet::new())
        }

        async fn upsert(&self, _id: u32) -> DomainResult<()> {
            self.attempts.fetch_add(1, Ordering::SeqCst);
            Err(DomainError::Internal("disk full".to_string()))
        }

        async fn delete(&self, _id: u32) -> DomainResult<()> {
            self.attempts.fetch_add(1, Ordering::SeqCst);
            Err(DomainError::Internal("disk full".to_string()))
        }
    }

    #[tokio::test]
    async fn test_worker_survives_failed_writes() {
        let attempts = Arc::new(AtomicUsize::new(0));
        let worker = ChecklistWorker::spawn(BrokenRepository { attempts: attempts.clone() });

        worker.upsert(1).await.expect("queueing never fails while running");
        worker.delete(1).await.expect("queueing never fails while running");

        // Queued behind both writes, so both have been attempted by now
        assert!(worker.load_all().await.unwrap().is_empty());
        assert_eq!(attempts.load(Ordering::SeqCst), 2);
    }

    // ========================
    // DbState
    // ========================

    #[tokio::test]
    async fn test_db_state_opens_once() {
        let dir = tempfile::tempdir().unwrap();
        let state = DbState::new(Some(dir.path().join("PokedexDB.db")));

        let first = state.worker().await.unwrap();
        first.upsert(3).await.unwrap();
        let second = state.worker().await.unwrap();
        assert!(std::ptr::eq(first, second));

        assert_eq!(second.load_all().await.unwrap(), ids(&[3]));
    }

    #[tokio::test]
    async fn test_warm_up_opens_store_in_advance() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("PokedexDB.db");
        let state = DbState::new(Some(path.clone()));

        state.warm_up().await.expect("store opens");

        assert!(path.exists());
        let conn = open_store(&path).unwrap();
        assert!(table_exists(&conn, COLLECTION_NAME).unwrap());
    }

    #[tokio::test]
    async fn test_db_state_reports_unavailable_store() {
        let state = DbState::new(Some(PathBuf::from("/nonexistent-dir/for/sure/PokedexDB.db")));

        match state.worker().await {
            Err(DomainError::Unavailable(_)) => {}
            Err(other) => panic!("unexpected error: {}", other),
            Ok(_) => panic!("store should not open"),
        }
        assert!(state.warm_up().await.is_err());
    }

    #[tokio::test]
    async fn test_missing_data_dir_leaves_store_unavailable() {
        let state = DbState::new(None);

        match state.worker().await {
            Err(DomainError::Unavailable(_)) => {}
            Err(other) => panic!("unexpected error: {}", other),
            Ok(_) => panic!("store should not open without a path"),
        }
        assert!(state.warm_up().await.is_err());
    }
}
