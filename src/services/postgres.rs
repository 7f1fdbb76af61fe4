use async_trait::async_trait;
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};
use std::time::Duration;

use crate::models::{NewWorker, Worker, WorkerType};
use crate::services::store::{StoreError, WorkerStore};

/// PostgreSQL-backed worker store
pub struct PostgresClient {
    pool: PgPool,
}

impl PostgresClient {
    /// Create a new PostgreSQL client from a connection string
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
        acquire_timeout_secs: u64,
    ) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(Duration::from_secs(acquire_timeout_secs))
            .idle_timeout(Duration::from_secs(600))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        // Run migrations on startup
        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    /// Create a new PostgreSQL client from settings
    pub async fn from_settings(
        url: &str,
        max_connections: Option<u32>,
        min_connections: Option<u32>,
        acquire_timeout_secs: Option<u64>,
    ) -> Result<Self, StoreError> {
        tracing::info!("Connecting to PostgreSQL");

        Self::new(
            url,
            max_connections.unwrap_or(10),
            min_connections.unwrap_or(1),
            acquire_timeout_secs.unwrap_or(5),
        )
        .await
    }

    fn worker_from_row(row: &PgRow) -> Worker {
        let worker_type: String = row.get("worker_type");
        Worker {
            id: row.get("id"),
            name: row.get("name"),
            title: row.get("title"),
            telephone: row.get("telephone"),
            lat: row.get("lat"),
            long: row.get("long"),
            worker_type: WorkerType::parse(&worker_type).unwrap_or_default(),
            created_at: row.get("created_at"),
        }
    }
}

#[async_trait]
impl WorkerStore for PostgresClient {
    async fn list_workers(&self) -> Result<Vec<Worker>, StoreError> {
        let query = r#"
            SELECT id, name, title, telephone, lat, long, worker_type, created_at
            FROM workers
            ORDER BY created_at, id
        "#;

        let rows = sqlx::query(query).fetch_all(&self.pool).await?;
        let workers: Vec<Worker> = rows.iter().map(Self::worker_from_row).collect();

        tracing::debug!("Loaded {} workers", workers.len());

        Ok(workers)
    }

    async fn create_worker(&self, worker: NewWorker) -> Result<Worker, StoreError> {
        let worker = worker.into_worker();

        let query = r#"
            INSERT INTO workers (id, name, title, telephone, lat, long, worker_type, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        "#;

        sqlx::query(query)
            .bind(worker.id)
            .bind(&worker.name)
            .bind(&worker.title)
            .bind(&worker.telephone)
            .bind(worker.lat)
            .bind(worker.long)
            .bind(worker.worker_type.as_str())
            .bind(worker.created_at)
            .execute(&self.pool)
            .await?;

        tracing::debug!("Created worker {} ({})", worker.name, worker.id);

        Ok(worker)
    }

    async fn mark_agency(&self, name: &str) -> Result<u64, StoreError> {
        let query = r#"
            UPDATE workers
            SET worker_type = $2
            WHERE name = $1
        "#;

        let result = sqlx::query(query)
            .bind(name)
            .bind(WorkerType::Agency.as_str())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn remove_duplicates(&self) -> Result<u64, StoreError> {
        let query = r#"
            DELETE FROM workers
            WHERE id IN (
                SELECT id FROM (
                    SELECT id,
                           ROW_NUMBER() OVER (
                               PARTITION BY name, telephone
                               ORDER BY created_at, id
                           ) AS position
                    FROM workers
                ) ranked
                WHERE ranked.position > 1
            )
        "#;

        let result = sqlx::query(query).execute(&self.pool).await?;

        tracing::info!("Removed {} duplicate workers", result.rows_affected());

        Ok(result.rows_affected())
    }

    async fn health_check(&self) -> Result<bool, StoreError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }
}
