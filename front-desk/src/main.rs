//! front-desk: hotel reservation back-office
//!
//! Long-running service that:
//! - Manages the room inventory and guest registry
//! - Drives the reservation lifecycle (reserve, check-in, invoice, cancel)
//! - Issues stay invoices and serves the accounting read API

mod api;
mod booking;
mod config;
mod db;
mod error;
mod state;

use config::Config;
use state::AppState;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "front_desk=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env()?;

    tracing::info!("Starting front-desk (env: {})", config.environment);

    // Initialize application state (pool, migrations, base inventory)
    let state = AppState::new(&config).await?;

    let app = api::create_router(state);

    let http_addr = format!("0.0.0.0:{}", config.http_port);
    let listener = tokio::net::TcpListener::bind(&http_addr).await?;
    tracing::info!("front-desk HTTP listening on {http_addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
