//! Checklist Worker
//!
//! Single background task that owns the store handle. Writes are queued and
//! applied strictly in submission order; reads go through the same queue so
//! they observe every write submitted before them.

use std::collections::BTreeSet;
use tokio::sync::{mpsc, oneshot};

use crate::config::WORKER_QUEUE_SIZE;
use crate::domain::{DomainError, DomainResult};
use super::traits::ChecklistRepository;

/// Commands understood by the worker
#[derive(Debug)]
pub enum ChecklistCommand {
    Upsert(u32),
    Delete(u32),
    LoadAll(oneshot::Sender<DomainResult<BTreeSet<u32>>>),
}

/// Handle to the worker task. Cheap to clone.
#[derive(Clone)]
pub struct ChecklistWorker {
    tx: mpsc::Sender<ChecklistCommand>,
}

impl ChecklistWorker {
    /// Start the worker on the current tokio runtime
    pub fn spawn<R>(repo: R) -> Self
    where
        R: ChecklistRepository + 'static,
    {
        let (tx, rx) = mpsc::channel(WORKER_QUEUE_SIZE);
        tokio::spawn(run(repo, rx));
        Self { tx }
    }

    async fn send(&self, cmd: ChecklistCommand) -> DomainResult<()> {
        self.tx
            .send(cmd)
            .await
            .map_err(|_| DomainError::Unavailable("Checklist worker stopped".to_string()))
    }

    /// Queue an upsert. Returns once queued, not once written.
    pub async fn upsert(&self, id: u32) -> DomainResult<()> {
        self.send(ChecklistCommand::Upsert(id)).await
    }

    /// Queue a delete. Returns once queued, not once written.
    pub async fn delete(&self, id: u32) -> DomainResult<()> {
        self.send(ChecklistCommand::Delete(id)).await
    }

    pub async fn load_all(&self) -> DomainResult<BTreeSet<u32>> {
        let (reply, rx) = oneshot::channel();
        self.send(ChecklistCommand::LoadAll(reply)).await?;
        rx.await
            .map_err(|_| DomainError::Internal("Checklist worker dropped the reply".to_string()))?
    }
}

async fn run<R: ChecklistRepository>(repo: R, mut rx: mpsc::Receiver<ChecklistCommand>) {
    while let Some(cmd) = rx.recv().await {
        match cmd {
            ChecklistCommand::Upsert(id) => {
                if let Err(e) = repo.upsert(id).await {
                    log::error!("Failed to mark #{} as checked: {}", id, e);
                }
            }
            ChecklistCommand::Delete(id) => {
                if let Err(e) = repo.delete(id).await {
                    log::error!("Failed to unmark #{}: {}", id, e);
                }
            }
            ChecklistCommand::LoadAll(reply) => {
                let _ = reply.send(repo.load_all().await);
            }
        }
    }
    log::info!("Checklist worker stopped");
}
