//! taxtracker - Main entry point
//!
//! Startup sequence: tracing init, config resolution, database connect
//! and schema migration, then HTTP serve. Schema creation happens here,
//! before the listener binds - never on the request path.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use taxtracker::config::Config;
use taxtracker::{build_router, db, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "taxtracker=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::parse();

    info!(
        "Starting taxtracker v{} on port {}",
        env!("CARGO_PKG_VERSION"),
        config.port
    );
    info!("Database: {}", config.database_url);

    let pool = db::connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;

    db::migrate(&pool)
        .await
        .context("Failed to run schema migration")?;

    let state = AppState::new(pool);
    let app = build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;
    info!("taxtracker listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
