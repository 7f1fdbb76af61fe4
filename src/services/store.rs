use async_trait::async_trait;
use std::collections::HashSet;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::models::{NewWorker, Worker, WorkerType};

/// Errors that can occur when reading or writing worker records
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    MigrateError(#[from] sqlx::migrate::MigrateError),
}

/// Source of worker records
///
/// `list_workers` returns a full snapshot; callers rank over the snapshot,
/// never over live records.
#[async_trait]
pub trait WorkerStore: Send + Sync {
    /// All workers, oldest first
    async fn list_workers(&self) -> Result<Vec<Worker>, StoreError>;

    async fn create_worker(&self, worker: NewWorker) -> Result<Worker, StoreError>;

    /// Set `worker_type = agency` on every worker named exactly `name`
    ///
    /// Returns the number of records updated.
    async fn mark_agency(&self, name: &str) -> Result<u64, StoreError>;

    /// Delete all but the earliest record of each (name, telephone) pair
    ///
    /// Returns the number of records removed.
    async fn remove_duplicates(&self) -> Result<u64, StoreError>;

    async fn health_check(&self) -> Result<bool, StoreError>;
}

/// Names split by whether a matching worker was found
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AgencyUpdate {
    pub updated: Vec<String>,
    pub not_found: Vec<String>,
}

/// Reclassify every listed worker as agency staff
///
/// Unknown names are logged and collected; they do not abort the batch.
pub async fn mark_agency_by_names(
    store: &dyn WorkerStore,
    names: &[String],
) -> Result<AgencyUpdate, StoreError> {
    let mut outcome = AgencyUpdate::default();

    for name in names {
        if store.mark_agency(name).await? > 0 {
            tracing::info!("Updated worker {} to agency", name);
            outcome.updated.push(name.clone());
        } else {
            tracing::warn!("No worker found with the name: {}", name);
            outcome.not_found.push(name.clone());
        }
    }

    Ok(outcome)
}

/// In-memory worker store
///
/// Used when no database is configured, and in tests.
#[derive(Debug, Default)]
pub struct MemoryWorkerStore {
    workers: RwLock<Vec<Worker>>,
}

impl MemoryWorkerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_workers(workers: Vec<Worker>) -> Self {
        Self {
            workers: RwLock::new(workers),
        }
    }
}

#[async_trait]
impl WorkerStore for MemoryWorkerStore {
    async fn list_workers(&self) -> Result<Vec<Worker>, StoreError> {
        Ok(self.workers.read().await.clone())
    }

    async fn create_worker(&self, worker: NewWorker) -> Result<Worker, StoreError> {
        let worker = worker.into_worker();
        self.workers.write().await.push(worker.clone());
        Ok(worker)
    }

    async fn mark_agency(&self, name: &str) -> Result<u64, StoreError> {
        let mut workers = self.workers.write().await;
        let mut updated = 0;
        for worker in workers.iter_mut().filter(|w| w.name == name) {
            worker.worker_type = WorkerType::Agency;
            updated += 1;
        }
        Ok(updated)
    }

    async fn remove_duplicates(&self) -> Result<u64, StoreError> {
        let mut workers = self.workers.write().await;
        let before = workers.len();

        // Stable sort keeps insertion order among equal timestamps
        workers.sort_by_key(|w| w.created_at);
        let mut seen = HashSet::new();
        workers.retain(|w| seen.insert((w.name.clone(), w.telephone.clone())));

        Ok((before - workers.len()) as u64)
    }

    async fn health_check(&self) -> Result<bool, StoreError> {
        Ok(true)
    }
}
