use axum::{Router, routing::get};
use util::state::AppState;

pub mod get;

pub fn projects_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get::list_projects))
        .route("/{project_id}", get(get::get_project))
        .route("/{project_id}/summary", get(get::get_summary))
        .route("/{project_id}/series", get(get::get_series))
}
