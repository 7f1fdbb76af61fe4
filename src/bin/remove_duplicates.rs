//! Remove duplicate worker records
//!
//! Workers sharing a name and telephone number are collapsed to the
//! earliest-created record.
//!
//! Run: cargo run --bin remove-duplicates

use care_locator::config::Settings;
use care_locator::logging;
use care_locator::services::{PostgresClient, WorkerStore};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();

    match run().await {
        Ok(removed) => {
            println!("Successfully removed {} duplicate worker records", removed);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<u64, Box<dyn std::error::Error>> {
    let settings = Settings::load()?;
    logging::init(&settings.logging.level, &settings.logging.format);

    let url = settings
        .database
        .url
        .ok_or("no database configured (set DATABASE_URL)")?;

    let store = PostgresClient::from_settings(
        &url,
        settings.database.max_connections,
        settings.database.min_connections,
        settings.database.acquire_timeout_secs,
    )
    .await?;

    Ok(store.remove_duplicates().await?)
}
