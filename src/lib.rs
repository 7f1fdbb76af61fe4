//! Care Locator - proximity ranking for care workers and facility locations
//!
//! Given a query point, ranks workers or catalog facilities by great-circle
//! distance, optionally filtered by name, and keeps the closest fraction.

pub mod catalog;
pub mod config;
pub mod core;
pub mod logging;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use catalog::FACILITIES;
pub use crate::core::{distance::{distance_between, haversine_distance}, rank, RankError, Ranker};
pub use models::{Facility, GeoPoint, Located, Named, RankedResult, Worker, WorkerType};
