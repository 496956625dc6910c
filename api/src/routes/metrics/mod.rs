//! `/metrics` route group.
//!
//! Browsers post from arbitrary origins, so every response in this group
//! carries permissive CORS headers and `OPTIONS` answers `204` directly.

use axum::{
    Router,
    http::{
        HeaderValue, StatusCode,
        header::{
            ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN,
        },
    },
    routing::get,
};
use tower_http::set_header::SetResponseHeaderLayer;
use util::state::AppState;

pub mod common;
pub mod get;
pub mod post;

pub fn metrics_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(get::list_metrics)
                .post(post::record_metric)
                .options(preflight),
        )
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET,POST,OPTIONS"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ))
}

/// OPTIONS /metrics
async fn preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}
