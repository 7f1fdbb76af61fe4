// Service exports
pub mod import;
pub mod postgres;
pub mod store;

pub use import::{read_names, read_worker_rows, ImportError};
pub use postgres::PostgresClient;
pub use store::{mark_agency_by_names, AgencyUpdate, MemoryWorkerStore, StoreError, WorkerStore};
