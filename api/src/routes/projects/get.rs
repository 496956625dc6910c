//! Read-only project endpoints.
//!
//! The summary and series views are recomputed from stored samples on every
//! request.

use crate::response::ApiResponse;
use crate::routes::common::{bad_response, service_error_response};
use axum::{
    Json,
    extract::{Path, Query, State, rejection::PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use ::common::vitals::MetricKind;
use serde::{Deserialize, Serialize};
use services::project_service::ProjectService;
use util::state::AppState;

#[derive(Debug, Serialize)]
pub struct ProjectResponse {
    pub id: i64,
    pub name: String,
}

impl From<db::models::project::Model> for ProjectResponse {
    fn from(p: db::models::project::Model) -> Self {
        Self { id: p.id, name: p.name }
    }
}

/// Unwraps the `{project_id}` segment, answering a non-integer id with the
/// standard `400` envelope.
fn project_id_from(path: Result<Path<i64>, PathRejection>) -> Result<i64, Response> {
    path.map(|Path(id)| id).map_err(|rejection| {
        bad_response(
            StatusCode::BAD_REQUEST,
            format!("Invalid project id: {}", rejection.body_text()),
        )
    })
}

/// GET /api/projects
///
/// Lists every project as `{id, name}`, ordered by id.
pub async fn list_projects(State(app_state): State<AppState>) -> Response {
    match ProjectService::list(app_state.db()).await {
        Ok(projects) => {
            let data: Vec<ProjectResponse> =
                projects.into_iter().map(Into::into).collect();
            (
                StatusCode::OK,
                Json(ApiResponse::success(data, "Projects retrieved successfully")),
            )
                .into_response()
        }
        Err(err) => service_error_response(err),
    }
}

/// GET /api/projects/{project_id}
pub async fn get_project(
    State(app_state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Response {
    let project_id = match project_id_from(path) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match ProjectService::get(app_state.db(), project_id).await {
        Ok(project) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                ProjectResponse::from(project),
                "Project retrieved successfully",
            )),
        )
            .into_response(),
        Err(err) => service_error_response(err),
    }
}

/// GET /api/projects/{project_id}/summary
///
/// Health verdict for the project: per-metric averages against their
/// thresholds, rolled up into `unknown`, `good`, `warn` or `bad`.
///
/// ```json
/// {
///   "success": true,
///   "data": {
///     "level": "warn",
///     "text": "Some metrics need attention: CLS (Cumulative Layout Shift) (0.25)",
///     "icon": "⚠️",
///     "color": "yellow",
///     "failing": [{ "kind": "cls", "name": "...", "average": 0.25, "formatted": "0.25" }],
///     "details": [ ... ]
///   },
///   "message": "Summary computed successfully"
/// }
/// ```
pub async fn get_summary(
    State(app_state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Response {
    let project_id = match project_id_from(path) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match ProjectService::summary(app_state.db(), project_id).await {
        Ok(summary) => (
            StatusCode::OK,
            Json(ApiResponse::success(summary, "Summary computed successfully")),
        )
            .into_response(),
        Err(err) => service_error_response(err),
    }
}

#[derive(Debug, Deserialize)]
pub struct SeriesQuery {
    #[serde(rename = "type")]
    pub metric_type: Option<String>,
}

/// GET /api/projects/{project_id}/series?type={type}
///
/// Chart-ready series for one known metric type, oldest point first.
///
/// ### Responses
/// - `200 OK`
/// - `400 Bad Request` if the id is not an integer, or `type` is missing or
///   not one of `lcp`, `cls`, `inp`, `fcp`, `ttfb`
/// - `404 Not Found` if the project does not exist
pub async fn get_series(
    State(app_state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    Query(params): Query<SeriesQuery>,
) -> Response {
    let project_id = match project_id_from(path) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let Some(raw) = params.metric_type.filter(|t| !t.is_empty()) else {
        return bad_response(StatusCode::BAD_REQUEST, "type is required");
    };
    let kind = match raw.parse::<MetricKind>() {
        Ok(kind) => kind,
        Err(msg) => return bad_response(StatusCode::BAD_REQUEST, msg),
    };

    match ProjectService::series(app_state.db(), project_id, kind, Utc::now()).await {
        Ok(series) => (
            StatusCode::OK,
            Json(ApiResponse::success(series, "Series built successfully")),
        )
            .into_response(),
        Err(err) => service_error_response(err),
    }
}
