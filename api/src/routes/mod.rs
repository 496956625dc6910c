//! HTTP route entry point for `/api/...`.
//!
//! Route groups:
//! - `/health` → liveness probe
//! - `/metrics` → Web Vitals ingestion and raw sample queries (cross-origin)
//! - `/projects` → project listing, health summary and chart series

use crate::routes::{health::health_routes, metrics::metrics_routes, projects::projects_routes};
use axum::Router;
use util::state::AppState;

pub mod common;
pub mod health;
pub mod metrics;
pub mod projects;

/// Builds the complete application router for all HTTP endpoints, with the
/// shared [`AppState`] already applied.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/health", health_routes())
        .nest("/metrics", metrics_routes())
        .nest("/projects", projects_routes())
        .with_state(app_state)
}
