use serde::Deserialize;
use validator::Validate;

/// Body of `POST /metrics` as sent by the browser reporter.
///
/// Every field is optional at the serde level so that a missing field is a
/// validation error (400) rather than a deserialization failure. A `value`
/// of `0` is present and valid.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MetricRequest {
    #[validate(required(message = "projectId is required"))]
    pub project_id: Option<i64>,

    #[serde(rename = "type")]
    #[validate(
        required(message = "type is required"),
        length(min = 1, message = "type must not be empty")
    )]
    pub metric_type: Option<String>,

    #[validate(required(message = "value is required"))]
    pub value: Option<f64>,

    pub user_agent: Option<String>,
    pub url: Option<String>,
}

/// Query string of `GET /metrics`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsQuery {
    pub project_id: Option<i64>,
    #[serde(rename = "type")]
    pub metric_type: Option<String>,
}
