use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{GeoPoint, NewWorker, WorkerType};

/// Coordinates submitted to the closest-workers endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerLocationQuery {
    pub lat: f64,
    #[serde(alias = "lon", alias = "longitude")]
    pub long: f64,
}

impl WorkerLocationQuery {
    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.long)
    }
}

/// Coordinates submitted to the facility finder
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacilityQuery {
    pub latitude: f64,
    pub longitude: f64,
}

impl FacilityQuery {
    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }
}

/// Query-string parameters of the facility finder
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FacilitySearchParams {
    #[serde(default)]
    pub q: Option<String>,
}

/// Request to create a worker record
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateWorkerRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(max = 100))]
    #[serde(default)]
    pub title: String,
    #[validate(length(max = 30))]
    #[serde(default)]
    pub telephone: String,
    pub lat: f64,
    #[serde(alias = "lon", alias = "longitude")]
    pub long: f64,
    #[serde(alias = "worker_type", rename = "workerType", default)]
    pub worker_type: WorkerType,
}

impl From<CreateWorkerRequest> for NewWorker {
    fn from(req: CreateWorkerRequest) -> Self {
        NewWorker {
            name: req.name,
            title: req.title,
            telephone: req.telephone,
            lat: req.lat,
            long: req.long,
            worker_type: req.worker_type,
        }
    }
}
