use crate::response::ApiResponse;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use services::ServiceError;

/// Maps a service failure onto the standard error envelope.
///
/// Validation errors become `400`, missing records `404`, and anything
/// coming out of the database `500` with the stringified detail.
pub fn service_error_response(err: ServiceError) -> Response {
    let (status, message) = match err {
        ServiceError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
        ServiceError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
        ServiceError::Database(e) => {
            tracing::error!(error = %e, "Database failure while handling request");
            (StatusCode::INTERNAL_SERVER_ERROR, format!("Server error: {e}"))
        }
    };

    bad_response(status, message)
}

pub fn bad_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ApiResponse::<()>::error(message))).into_response()
}
