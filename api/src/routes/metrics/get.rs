use crate::response::ApiResponse;
use crate::routes::common::{bad_response, service_error_response};
use crate::routes::metrics::common::MetricsQuery;
use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use services::metric_service::MetricService;
use util::state::AppState;

/// GET /api/metrics?projectId={id}&type={type}
///
/// Returns up to 1000 samples for the project, newest first. `type` is an
/// optional exact-match filter; an empty `type` is ignored.
///
/// ### Responses
/// - `200 OK` with an array of records (empty if nothing matches)
/// - `400 Bad Request` if `projectId` is missing or not an integer
/// - `500 Internal Server Error` on database failure
pub async fn list_metrics(
    State(app_state): State<AppState>,
    query: Result<Query<MetricsQuery>, QueryRejection>,
) -> Response {
    let Query(params) = match query {
        Ok(q) => q,
        Err(rejection) => {
            return bad_response(
                StatusCode::BAD_REQUEST,
                format!("Invalid query: {}", rejection.body_text()),
            );
        }
    };

    let Some(project_id) = params.project_id else {
        return bad_response(StatusCode::BAD_REQUEST, "projectId is required");
    };

    let metric_type = params.metric_type.as_deref().filter(|t| !t.is_empty());

    match MetricService::recent(app_state.db(), project_id, metric_type).await {
        Ok(metrics) => (
            StatusCode::OK,
            Json(ApiResponse::success(metrics, "Metrics retrieved successfully")),
        )
            .into_response(),
        Err(err) => service_error_response(err),
    }
}
