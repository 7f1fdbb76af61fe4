use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A latitude/longitude pair in decimal degrees
///
/// Coordinates are not range-checked. Values outside [-90, 90] / [-180, 180]
/// still produce a mathematically defined distance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Both coordinates are finite numbers
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }
}

/// Anything with a display name
pub trait Named {
    fn name(&self) -> &str;
}

/// Anything with a position on the globe
pub trait Located {
    fn point(&self) -> GeoPoint;
}

/// Classification of a worker record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkerType {
    Agency,
    #[serde(rename = "dom")]
    Domiciliary,
    /// Not yet classified
    #[default]
    Worker,
}

impl WorkerType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkerType::Agency => "agency",
            WorkerType::Domiciliary => "dom",
            WorkerType::Worker => "worker",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "agency" => Some(WorkerType::Agency),
            "dom" | "domiciliary" => Some(WorkerType::Domiciliary),
            "worker" => Some(WorkerType::Worker),
            _ => None,
        }
    }
}

/// Persisted care worker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Worker {
    pub id: Uuid,
    pub name: String,
    pub title: String,
    pub telephone: String,
    pub lat: f64,
    pub long: f64,
    #[serde(rename = "workerType", default)]
    pub worker_type: WorkerType,
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Named for Worker {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Located for Worker {
    fn point(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.long)
    }
}

/// Fields needed to create a worker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewWorker {
    pub name: String,
    pub title: String,
    pub telephone: String,
    pub lat: f64,
    pub long: f64,
    #[serde(rename = "workerType", default)]
    pub worker_type: WorkerType,
}

impl NewWorker {
    pub fn into_worker(self) -> Worker {
        Worker {
            id: Uuid::new_v4(),
            name: self.name,
            title: self.title,
            telephone: self.telephone,
            lat: self.lat,
            long: self.long,
            worker_type: self.worker_type,
            created_at: chrono::Utc::now(),
        }
    }
}

/// Predefined facility location, part of the compiled-in catalog
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Facility {
    pub name: &'static str,
    pub address: &'static str,
    pub point: GeoPoint,
}

impl Facility {
    pub const fn new(name: &'static str, address: &'static str, lat: f64, long: f64) -> Self {
        Self {
            name,
            address,
            point: GeoPoint::new(lat, long),
        }
    }
}

impl Named for Facility {
    fn name(&self) -> &str {
        self.name
    }
}

impl Located for Facility {
    fn point(&self) -> GeoPoint {
        self.point
    }
}

/// A candidate paired with its distance from the query point, in miles
///
/// Borrows from the candidate snapshot passed to the ranker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedResult<'a, C> {
    pub candidate: &'a C,
    pub distance_miles: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worker_type_round_trip() {
        for wt in [WorkerType::Agency, WorkerType::Domiciliary, WorkerType::Worker] {
            assert_eq!(WorkerType::parse(wt.as_str()), Some(wt));
        }
        assert_eq!(WorkerType::parse("Domiciliary"), Some(WorkerType::Domiciliary));
        assert_eq!(WorkerType::parse("nurse"), None);
    }

    #[test]
    fn test_worker_type_serde() {
        let json = serde_json::to_string(&WorkerType::Domiciliary).unwrap();
        assert_eq!(json, "\"dom\"");
        let parsed: WorkerType = serde_json::from_str("\"agency\"").unwrap();
        assert_eq!(parsed, WorkerType::Agency);
    }

    #[test]
    fn test_new_worker_defaults_to_unclassified() {
        let new = NewWorker {
            name: "Jane".to_string(),
            title: "Carer".to_string(),
            telephone: "0161".to_string(),
            lat: 53.4,
            long: -2.2,
            worker_type: WorkerType::default(),
        };
        let worker = new.into_worker();
        assert_eq!(worker.worker_type, WorkerType::Worker);
        assert_eq!(worker.point(), GeoPoint::new(53.4, -2.2));
        assert_eq!(Named::name(&worker), "Jane");
    }

    #[test]
    fn test_geo_point_finite() {
        assert!(GeoPoint::new(51.5, -0.12).is_finite());
        assert!(!GeoPoint::new(f64::NAN, 0.0).is_finite());
        assert!(!GeoPoint::new(0.0, f64::INFINITY).is_finite());
    }
}
