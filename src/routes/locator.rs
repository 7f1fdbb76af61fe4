use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::catalog::FACILITIES;
use crate::core::{RankError, Ranker};
use crate::models::{
    AgencyUpdateResponse, ClosestFacilitiesResponse, ClosestWorkersResponse,
    CreateWorkerRequest, ErrorResponse, FacilityQuery, FacilitySearchParams, HealthResponse,
    RankedFacility, RankedWorker, WorkerLocationQuery, WorkersResponse,
};
use crate::services::{mark_agency_by_names, read_names, StoreError, WorkerStore};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn WorkerStore>,
    pub ranker: Ranker,
}

/// Configure all locator routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/workers", web::get().to(list_workers))
        .route("/workers", web::post().to(create_worker))
        .route("/workers/closest", web::post().to(closest_workers))
        .route("/workers/agency", web::post().to(upload_agency_names))
        .route("/facilities/closest", web::post().to(closest_facilities));
}

fn bad_request(error: &str, message: String) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: error.to_string(),
        message,
        status_code: 400,
    })
}

fn rank_failed(err: RankError) -> HttpResponse {
    tracing::info!("Rejected ranking request: {}", err);
    bad_request("Invalid input", err.to_string())
}

fn store_failed(context: &str, err: StoreError) -> HttpResponse {
    tracing::error!("{}: {}", context, err);
    HttpResponse::InternalServerError().json(ErrorResponse {
        error: context.to_string(),
        message: err.to_string(),
        status_code: 500,
    })
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let healthy = state.store.health_check().await.unwrap_or(false);

    let status = if healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// List every worker record
///
/// GET /api/v1/workers
async fn list_workers(state: web::Data<AppState>) -> impl Responder {
    match state.store.list_workers().await {
        Ok(workers) => HttpResponse::Ok().json(WorkersResponse {
            count: workers.len(),
            workers,
        }),
        Err(e) => store_failed("Failed to list workers", e),
    }
}

/// Create a worker record
///
/// POST /api/v1/workers
async fn create_worker(
    state: web::Data<AppState>,
    req: web::Json<CreateWorkerRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return bad_request("Validation failed", errors.to_string());
    }

    match state.store.create_worker(req.into_inner().into()).await {
        Ok(worker) => {
            tracing::info!("Created worker {}", worker.name);
            HttpResponse::Created().json(worker)
        }
        Err(e) => store_failed("Failed to create worker", e),
    }
}

/// Closest workers endpoint
///
/// POST /api/v1/workers/closest
///
/// Request body:
/// ```json
/// { "lat": 53.48, "long": -2.24 }
/// ```
async fn closest_workers(
    state: web::Data<AppState>,
    req: web::Json<WorkerLocationQuery>,
) -> impl Responder {
    // Rank over a snapshot; the store may change while we sort
    let workers = match state.store.list_workers().await {
        Ok(workers) => workers,
        Err(e) => return store_failed("Failed to load workers", e),
    };

    let ranked = match state.ranker.rank(req.point(), &workers, None) {
        Ok(ranked) => ranked,
        Err(e) => return rank_failed(e),
    };

    tracing::info!(
        "Returning {} of {} workers near ({}, {})",
        ranked.len(),
        workers.len(),
        req.lat,
        req.long
    );

    HttpResponse::Ok().json(ClosestWorkersResponse {
        workers: ranked.into_iter().map(RankedWorker::from).collect(),
        total_candidates: workers.len(),
    })
}

/// Facility finder endpoint
///
/// POST /api/v1/facilities/closest?q={filter}
///
/// Request body:
/// ```json
/// { "latitude": 53.48, "longitude": -2.24 }
/// ```
async fn closest_facilities(
    state: web::Data<AppState>,
    params: web::Query<FacilitySearchParams>,
    req: web::Json<FacilityQuery>,
) -> impl Responder {
    let query = params.q.clone().unwrap_or_default();

    let ranked = match state.ranker.rank(req.point(), FACILITIES, Some(query.as_str())) {
        Ok(ranked) => ranked,
        Err(e) => return rank_failed(e),
    };

    tracing::info!(
        "Returning {} facilities for filter {:?}",
        ranked.len(),
        query
    );

    HttpResponse::Ok().json(ClosestFacilitiesResponse {
        locations: ranked.into_iter().map(RankedFacility::from).collect(),
        query,
        total_candidates: FACILITIES.len(),
    })
}

/// Reclassify workers as agency staff from an uploaded name list
///
/// POST /api/v1/workers/agency
///
/// Body: CSV with a `Name` column.
async fn upload_agency_names(
    state: web::Data<AppState>,
    body: web::Bytes,
) -> impl Responder {
    let names = match read_names(&body[..]) {
        Ok(names) => names,
        Err(e) => return bad_request("Invalid upload", e.to_string()),
    };

    match mark_agency_by_names(state.store.as_ref(), &names).await {
        Ok(outcome) => {
            tracing::info!(
                "Agency update: {} updated, {} not found",
                outcome.updated.len(),
                outcome.not_found.len()
            );
            HttpResponse::Ok().json(AgencyUpdateResponse {
                updated: outcome.updated,
                not_found: outcome.not_found,
            })
        }
        Err(e) => store_failed("Failed to update worker types", e),
    }
}
