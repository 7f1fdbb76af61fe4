// Integration tests for Care Locator

use actix_web::{test, web, App};
use care_locator::core::Ranker;
use care_locator::models::{
    AgencyUpdateResponse, ClosestWorkersResponse, GeoPoint, NewWorker, WorkerType,
    WorkersResponse,
};
use care_locator::routes::{self, AppState};
use care_locator::services::{MemoryWorkerStore, WorkerStore};
use care_locator::rank;
use std::sync::Arc;

fn create_test_worker(name: &str, telephone: &str, lat: f64, long: f64) -> NewWorker {
    NewWorker {
        name: name.to_string(),
        title: "Healthcare Worker".to_string(),
        telephone: telephone.to_string(),
        lat,
        long,
        worker_type: WorkerType::Worker,
    }
}

async fn seeded_store() -> Arc<MemoryWorkerStore> {
    let store = Arc::new(MemoryWorkerStore::new());
    let workers = [
        create_test_worker("Edinburgh Carer", "1", 55.95, -3.19),
        create_test_worker("London Carer", "2", 51.5, -0.12),
        create_test_worker("Manchester Carer", "3", 53.48, -2.24),
        create_test_worker("Bristol Carer", "4", 51.45, -2.59),
    ];
    for worker in workers {
        store.create_worker(worker).await.unwrap();
    }
    store
}

fn app_state(store: Arc<MemoryWorkerStore>, ranker: Ranker) -> AppState {
    AppState { store, ranker }
}

#[actix_web::test]
async fn test_worker_snapshot_ranking() {
    let store = seeded_store().await;
    let workers = store.list_workers().await.unwrap();

    let result = rank(GeoPoint::new(51.5, -0.12), &workers, None, 0.5).unwrap();

    assert_eq!(result.len(), 2);
    assert_eq!(result[0].candidate.name, "London Carer");
    assert_eq!(result[1].candidate.name, "Bristol Carer");
}

#[actix_web::test]
async fn test_closest_workers_endpoint() {
    let store = seeded_store().await;
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state(store, Ranker::default())))
            .configure(routes::configure_payloads)
            .configure(routes::configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/workers/closest")
        .set_json(serde_json::json!({ "lat": 51.5, "long": -0.12 }))
        .to_request();
    let resp: ClosestWorkersResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(resp.total_candidates, 4);
    assert_eq!(resp.workers.len(), 2);
    assert_eq!(resp.workers[0].worker.name, "London Carer");
    assert_eq!(resp.workers[0].distance_miles, 0.0);
    assert!(resp.workers[1].distance_miles > 0.0);
}

#[actix_web::test]
async fn test_closest_workers_rejects_non_numeric_coordinates() {
    let store = seeded_store().await;
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state(store, Ranker::default())))
            .configure(routes::configure_payloads)
            .configure(routes::configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/workers/closest")
        .set_json(serde_json::json!({ "lat": "north", "long": -0.12 }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_facility_finder_with_filter() {
    let store = Arc::new(MemoryWorkerStore::new());
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state(store, Ranker::new(1.0).unwrap())))
            .configure(routes::configure_payloads)
            .configure(routes::configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/facilities/closest?q=ward")
        .set_json(serde_json::json!({ "latitude": 53.21, "longitude": -2.89 }))
        .to_request();
    let resp: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(resp["query"], "ward");
    let locations = resp["locations"].as_array().unwrap();
    assert!(!locations.is_empty());
    for location in locations {
        let name = location["name"].as_str().unwrap().to_lowercase();
        assert!(name.contains("ward"), "{}", name);
    }
    assert!(locations[0]["address"].as_str().unwrap().contains("CHESTER"));
}

#[actix_web::test]
async fn test_facility_finder_without_filter_returns_half() {
    let store = Arc::new(MemoryWorkerStore::new());
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state(store, Ranker::default())))
            .configure(routes::configure_payloads)
            .configure(routes::configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/facilities/closest")
        .set_json(serde_json::json!({ "latitude": 51.5, "longitude": -0.12 }))
        .to_request();
    let resp: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    let total = resp["total_candidates"].as_u64().unwrap() as usize;
    assert_eq!(resp["locations"].as_array().unwrap().len(), total / 2);
    assert_eq!(resp["query"], "");
}

#[actix_web::test]
async fn test_facility_finder_long_filter_matches_nothing() {
    let store = Arc::new(MemoryWorkerStore::new());
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state(store, Ranker::default())))
            .configure(routes::configure_payloads)
            .configure(routes::configure_routes),
    )
    .await;

    let filter = "x".repeat(250);
    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/facilities/closest?q={}", filter))
        .set_json(serde_json::json!({ "latitude": 51.5, "longitude": -0.12 }))
        .to_request();
    let resp: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert!(resp["locations"].as_array().unwrap().is_empty());
    assert_eq!(resp["query"], filter.as_str());
}

#[actix_web::test]
async fn test_agency_upload_matches_names_exactly() {
    let store = seeded_store().await;
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state(store.clone(), Ranker::default())))
            .configure(routes::configure_payloads)
            .configure(routes::configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/workers/agency")
        .set_payload("Name\n London Carer \n")
        .to_request();
    let resp: AgencyUpdateResponse = test::call_and_read_body_json(&app, req).await;

    assert!(resp.updated.is_empty());
    assert_eq!(resp.not_found, vec![" London Carer ".to_string()]);

    let workers = store.list_workers().await.unwrap();
    assert!(workers.iter().all(|w| w.worker_type == WorkerType::Worker));
}

#[actix_web::test]
async fn test_agency_upload_and_listing() {
    let store = seeded_store().await;
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state(store, Ranker::default())))
            .configure(routes::configure_payloads)
            .configure(routes::configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/workers/agency")
        .set_payload("Name\nLondon Carer\nUnknown Person\n")
        .to_request();
    let resp: AgencyUpdateResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(resp.updated, vec!["London Carer".to_string()]);
    assert_eq!(resp.not_found, vec!["Unknown Person".to_string()]);

    let req = test::TestRequest::get().uri("/api/v1/workers").to_request();
    let resp: WorkersResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(resp.count, 4);
    let london = resp.workers.iter().find(|w| w.name == "London Carer").unwrap();
    assert_eq!(london.worker_type, WorkerType::Agency);
}

#[actix_web::test]
async fn test_agency_upload_without_name_column() {
    let store = seeded_store().await;
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state(store, Ranker::default())))
            .configure(routes::configure_payloads)
            .configure(routes::configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/workers/agency")
        .set_payload("Surname\nCarer\n")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_create_worker_endpoint() {
    let store = Arc::new(MemoryWorkerStore::new());
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(app_state(store.clone(), Ranker::default())))
            .configure(routes::configure_payloads)
            .configure(routes::configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/workers")
        .set_json(serde_json::json!({
            "name": "John Doe",
            "title": "Healthcare Worker",
            "telephone": "01234",
            "lat": 60.94139545,
            "long": 71.88098894
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::CREATED);

    let req = test::TestRequest::post()
        .uri("/api/v1/workers")
        .set_json(serde_json::json!({ "name": "", "lat": 0.0, "long": 0.0 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);

    assert_eq!(store.list_workers().await.unwrap().len(), 1);
}

#[actix_web::test]
async fn test_remove_duplicates_then_rank() {
    let store = seeded_store().await;
    store
        .create_worker(create_test_worker("London Carer", "2", 51.5, -0.12))
        .await
        .unwrap();

    assert_eq!(store.remove_duplicates().await.unwrap(), 1);

    let workers = store.list_workers().await.unwrap();
    let result = rank(GeoPoint::new(51.5, -0.12), &workers, Some("london"), 1.0).unwrap();
    assert_eq!(result.len(), 1);
}
