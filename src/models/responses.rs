use serde::{Deserialize, Serialize};

use crate::models::domain::{Facility, RankedResult, Worker};

/// A worker with its distance from the query point
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedWorker {
    pub worker: Worker,
    #[serde(rename = "distanceMiles")]
    pub distance_miles: f64,
}

impl From<RankedResult<'_, Worker>> for RankedWorker {
    fn from(result: RankedResult<'_, Worker>) -> Self {
        Self {
            worker: result.candidate.clone(),
            distance_miles: result.distance_miles,
        }
    }
}

/// A catalog facility with its distance from the query point
#[derive(Debug, Clone, Serialize)]
pub struct RankedFacility {
    pub name: &'static str,
    pub address: &'static str,
    pub lat: f64,
    pub long: f64,
    #[serde(rename = "distanceMiles")]
    pub distance_miles: f64,
}

impl From<RankedResult<'_, Facility>> for RankedFacility {
    fn from(result: RankedResult<'_, Facility>) -> Self {
        let facility = result.candidate;
        Self {
            name: facility.name,
            address: facility.address,
            lat: facility.point.lat,
            long: facility.point.lon,
            distance_miles: result.distance_miles,
        }
    }
}

/// Response for the closest workers endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClosestWorkersResponse {
    pub workers: Vec<RankedWorker>,
    pub total_candidates: usize,
}

/// Response for the facility finder
#[derive(Debug, Clone, Serialize)]
pub struct ClosestFacilitiesResponse {
    pub locations: Vec<RankedFacility>,
    pub query: String,
    pub total_candidates: usize,
}

/// Response for the worker listing endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkersResponse {
    pub workers: Vec<Worker>,
    pub count: usize,
}

/// Outcome of an agency reclassification upload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgencyUpdateResponse {
    pub updated: Vec<String>,
    pub not_found: Vec<String>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
