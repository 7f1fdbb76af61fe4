// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Facility, GeoPoint, Located, Named, NewWorker, RankedResult, Worker, WorkerType};
pub use requests::{CreateWorkerRequest, FacilitySearchParams, FacilityQuery, WorkerLocationQuery};
pub use responses::{
    AgencyUpdateResponse, ClosestFacilitiesResponse, ClosestWorkersResponse, ErrorResponse,
    HealthResponse, RankedFacility, RankedWorker, WorkersResponse,
};
