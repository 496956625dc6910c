use crate::response::ApiResponse;
use crate::routes::common::{bad_response, service_error_response};
use crate::routes::metrics::common::MetricRequest;
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use services::metric_service::{MetricService, RecordMetric};
use util::state::AppState;
use validator::Validate;

/// POST /api/metrics
///
/// Records one Web Vitals sample for a project.
///
/// ### Request Body
/// ```json
/// {
///   "projectId": 1,
///   "type": "lcp",
///   "value": 2140.5,
///   "userAgent": "Mozilla/5.0 ...",
///   "url": "https://example.com/"
/// }
/// ```
///
/// ### Responses
/// - `200 OK` with the stored record (`id` and `timestamp` assigned by the server)
/// - `400 Bad Request` if `projectId`, `type` or `value` is missing, the body
///   is malformed, or the project does not exist
/// - `500 Internal Server Error` on database failure
///
/// Reports are not deduplicated; a retried report is stored twice.
pub async fn record_metric(
    State(app_state): State<AppState>,
    payload: Result<Json<MetricRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            return bad_response(
                StatusCode::BAD_REQUEST,
                format!("Invalid request body: {}", rejection.body_text()),
            );
        }
    };

    if let Err(validation_errors) = req.validate() {
        let message = ::common::format_validation_errors(&validation_errors);
        return bad_response(StatusCode::BAD_REQUEST, message);
    }

    let (Some(project_id), Some(metric_type), Some(value)) =
        (req.project_id, req.metric_type, req.value)
    else {
        return bad_response(StatusCode::BAD_REQUEST, "Missing required fields");
    };

    let params = RecordMetric {
        project_id,
        metric_type,
        value,
        user_agent: req.user_agent,
        url: req.url,
    };

    match MetricService::record(app_state.db(), params).await {
        Ok(metric) => (
            StatusCode::OK,
            Json(ApiResponse::success(metric, "Metric recorded successfully")),
        )
            .into_response(),
        Err(err) => service_error_response(err),
    }
}
