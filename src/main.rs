mod blob;
mod config;
mod controller;
mod data;
mod error;
mod ingest;
mod model;
mod router;
mod service;
mod startup;
mod state;

use axum::extract::DefaultBodyLimit;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::{config::Config, state::AppState};

/// Uploads carry a full chapter of page images in one request.
const MAX_UPLOAD_BYTES: usize = 100 * 1024 * 1024;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let blob = startup::setup_blob_store(&config)?;

    let app = router::router()
        .with_state(AppState::new(db, blob))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES));

    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    info!("Listening on {}", config.listen_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
