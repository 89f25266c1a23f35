// KAI Admin Backend Server
// Serves the admin dashboard data from in-memory state

use anyhow::Result;
use kai_backend::config::{Config, LogFormat};
use kai_backend::{build_router, AppState};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;

    // Initialize logging
    let filter = EnvFilter::from_default_env()
        .add_directive("kai_backend=info".parse()?)
        .add_directive("tower_http=info".parse()?);
    let subscriber = tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .with_env_filter(filter);
    match config.log_format {
        LogFormat::Pretty => subscriber.init(),
        LogFormat::Json => subscriber.json().init(),
    }

    info!("Starting KAI Admin Backend");
    info!("Configuration:");
    info!("  Listen address: {}", config.listen_addr());
    info!("  Admin account: {}", config.credentials.email);

    let state = Arc::new(AppState::seeded(config.credentials.clone()));
    info!(
        "Seeded {} refunds, {} confirmations, {} trains",
        state.refunds.read().await.len(),
        state.confirmations.read().await.len(),
        state.trains.len()
    );

    let app = build_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    info!("KAI Admin Backend listening on {}", listener.local_addr()?);

    axum::serve(listener, app.into_make_service())
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))
}
