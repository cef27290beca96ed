//! taxtracker library - income tracking with federal tax estimation
//!
//! Persists income records in SQLite and computes an estimated federal
//! tax liability from the 2024 single-filer progressive bracket schedule.

use axum::Router;
use sqlx::SqlitePool;
use tower_http::cors::CorsLayer;

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod tax;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, passed explicitly to every handler
    pub db: SqlitePool,
}

impl AppState {
    /// Create new application state
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }
}

/// Build application router
///
/// CORS is fully permissive: the service has a single browser client
/// and no access control.
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{delete, get};

    Router::new()
        .route(
            "/api/incomes",
            get(api::list_incomes).post(api::add_income),
        )
        .route("/api/incomes/:id", delete(api::delete_income))
        .route("/api/tax-summary", get(api::tax_summary))
        .merge(api::health_routes())
        .with_state(state)
        .layer(CorsLayer::permissive())
}
