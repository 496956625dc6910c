use api::middleware::log_request;
use api::routes::routes;
use axum::{Router, middleware::from_fn, response::Response};
use serde_json::Value;
use util::state::AppState;

/// Router over a fresh, migrated in-memory database, wrapped in the same
/// request logging layer as the server. Each call gets its own database, so
/// tests can run in parallel.
pub async fn make_test_app() -> (Router, AppState) {
    let db = db::test_utils::setup_test_db().await;
    let app_state = AppState::new(db);

    let router = Router::new()
        .nest("/api", routes(app_state.clone()))
        .layer(from_fn(log_request));

    (router, app_state)
}

pub async fn read_json_body(res: Response) -> Value {
    let body_bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice::<Value>(&body_bytes).unwrap()
}
