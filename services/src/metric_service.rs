//! Ingestion and raw query of Web Vitals samples.

use crate::error::{ServiceError, ServiceResult};
use db::models::project::Model as ProjectModel;
use db::models::web_vital_metric::{Model as MetricModel, NewSample};
use sea_orm::DatabaseConnection;

/// Upper bound on rows returned by a single metrics query.
pub const QUERY_LIMIT: u64 = 1000;

#[derive(Debug, Clone)]
pub struct RecordMetric {
    pub project_id: i64,
    pub metric_type: String,
    pub value: f64,
    pub user_agent: Option<String>,
    pub url: Option<String>,
}

pub struct MetricService;

impl MetricService {
    /// Stores one sample. Retried reports are stored again; there is no
    /// idempotency key.
    pub async fn record(
        db: &DatabaseConnection,
        params: RecordMetric,
    ) -> ServiceResult<MetricModel> {
        if !ProjectModel::exists(db, params.project_id).await? {
            tracing::warn!(
                project_id = params.project_id,
                "Rejected metric for unknown project"
            );
            return Err(ServiceError::Validation("Invalid projectId".into()));
        }

        let metric = MetricModel::create(
            db,
            NewSample {
                project_id: params.project_id,
                metric_type: params.metric_type,
                value: params.value,
                user_agent: params.user_agent,
                url: params.url,
            },
        )
        .await?;

        tracing::debug!(
            id = metric.id,
            project_id = metric.project_id,
            metric_type = %metric.metric_type,
            value = metric.value,
            "Recorded metric"
        );
        Ok(metric)
    }

    /// Up to [`QUERY_LIMIT`] samples for a project, newest first. An unknown
    /// project simply has no samples.
    pub async fn recent(
        db: &DatabaseConnection,
        project_id: i64,
        metric_type: Option<&str>,
    ) -> ServiceResult<Vec<MetricModel>> {
        Ok(MetricModel::recent(db, project_id, metric_type, QUERY_LIMIT).await?)
    }
}
