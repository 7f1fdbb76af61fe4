use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use care_locator::config::Settings;
use care_locator::core::Ranker;
use care_locator::routes::{self, AppState};
use care_locator::services::{MemoryWorkerStore, PostgresClient, WorkerStore};
use care_locator::{logging, FACILITIES};
use std::sync::Arc;
use tracing::{error, info, warn};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
        }
    };

    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| settings.logging.level.clone());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| settings.logging.format.clone());
    logging::init(&log_level, &log_format);

    info!("Starting Care Locator service...");

    let ranker = Ranker::new(settings.ranking.fraction).map_err(|e| {
        error!("Invalid ranking configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    info!("Ranker keeps the closest {:.0}% of candidates", ranker.fraction() * 100.0);

    let store: Arc<dyn WorkerStore> = match settings.database.url.as_deref() {
        Some(url) => {
            let client = PostgresClient::from_settings(
                url,
                settings.database.max_connections,
                settings.database.min_connections,
                settings.database.acquire_timeout_secs,
            )
            .await
            .map_err(|e| {
                error!("Failed to connect to PostgreSQL: {}", e);
                std::io::Error::new(std::io::ErrorKind::Other, e.to_string())
            })?;
            info!("PostgreSQL worker store initialized");
            Arc::new(client)
        }
        None => {
            warn!("No database configured, workers are kept in memory");
            Arc::new(MemoryWorkerStore::new())
        }
    };

    info!("Facility catalog holds {} locations", FACILITIES.len());

    let app_state = AppState { store, ranker };

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .configure(routes::configure_payloads)
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
