//! Team catalog HTTP server binary.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin teamcat-server
//!
//! # With an explicit config file and a seed catalog
//! TEAMCAT_CONFIG=teamcat.toml cargo run --bin teamcat-server
//! ```
//!
//! # Environment Variables
//!
//! - `TEAMCAT_CONFIG`: Path to the TOML config file
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use teamcat::config::AppConfig;
use teamcat::db::{self, FullRepository, LocalRepository};
use teamcat::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting team catalog server");

    let config = AppConfig::load().context("Failed to load configuration")?;

    let repository: Arc<dyn FullRepository> = Arc::new(LocalRepository::new());
    if let Some(snapshot) = config.load_seed()? {
        let outcome = db::store_catalog(repository.as_ref(), snapshot)
            .await
            .context("Failed to store seed catalog")?;
        info!(
            "Seeded catalog version {} with {} teams",
            outcome.info.version, outcome.info.team_count
        );
    }

    let state = AppState::new(repository).with_dashboard_settings(config.dashboard.clone());
    let app = create_router(state);

    let addr: SocketAddr = config
        .bind_address()
        .parse()
        .with_context(|| format!("Invalid bind address {}", config.bind_address()))?;

    info!("Server listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
