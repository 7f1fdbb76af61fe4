//! Bulk worker import
//!
//! Reads a CSV file with `Name, Title, Telephone, Latitude, Longitude`
//! columns and creates one worker per row.
//!
//! Run: cargo run --bin import-workers -- workers.csv

use care_locator::config::Settings;
use care_locator::logging;
use care_locator::services::{read_worker_rows, PostgresClient, WorkerStore};
use std::fs::File;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();

    let Some(path) = std::env::args().nth(1) else {
        eprintln!("Usage: import-workers <file.csv>");
        return ExitCode::FAILURE;
    };

    match run(&path).await {
        Ok(count) => {
            println!("Successfully imported {} workers", count);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(path: &str) -> Result<usize, Box<dyn std::error::Error>> {
    let settings = Settings::load()?;
    logging::init(&settings.logging.level, &settings.logging.format);

    let url = settings
        .database
        .url
        .ok_or("no database configured (set DATABASE_URL)")?;

    // Parse everything before touching the database
    let workers = read_worker_rows(File::open(path)?)?;
    tracing::info!("Read {} worker rows from {}", workers.len(), path);

    let store = PostgresClient::from_settings(
        &url,
        settings.database.max_connections,
        settings.database.min_connections,
        settings.database.acquire_timeout_secs,
    )
    .await?;

    let count = workers.len();
    for worker in workers {
        store.create_worker(worker).await?;
    }

    Ok(count)
}
