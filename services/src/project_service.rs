//! Project lookups and the per-project views built from stored samples.

use crate::error::{ServiceError, ServiceResult};
use crate::metric_service::MetricService;
use chrono::{DateTime, Utc};
use common::series::{build_series, ChartSeries};
use common::summary::{summarize, ProjectSummary};
use common::vitals::{MetricKind, VitalSample};
use db::models::project::Model as ProjectModel;
use futures::future::try_join_all;
use sea_orm::DatabaseConnection;
use std::collections::HashMap;

pub struct ProjectService;

impl ProjectService {
    pub async fn list(db: &DatabaseConnection) -> ServiceResult<Vec<ProjectModel>> {
        Ok(ProjectModel::list(db).await?)
    }

    pub async fn get(db: &DatabaseConnection, project_id: i64) -> ServiceResult<ProjectModel> {
        ProjectModel::find_by_id(db, project_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Project {project_id} not found")))
    }

    /// Newest-first samples for every known metric type, fetched concurrently.
    pub async fn snapshot(
        db: &DatabaseConnection,
        project_id: i64,
    ) -> ServiceResult<HashMap<MetricKind, Vec<VitalSample>>> {
        let fetches = MetricKind::ALL.into_iter().map(|kind| async move {
            let rows = MetricService::recent(db, project_id, Some(kind.as_str())).await?;
            let samples = rows
                .into_iter()
                .map(|m| VitalSample {
                    value: m.value,
                    timestamp: m.timestamp,
                })
                .collect::<Vec<_>>();
            Ok::<_, ServiceError>((kind, samples))
        });

        Ok(try_join_all(fetches).await?.into_iter().collect())
    }

    pub async fn summary(
        db: &DatabaseConnection,
        project_id: i64,
    ) -> ServiceResult<ProjectSummary> {
        Self::get(db, project_id).await?;
        let snapshot = Self::snapshot(db, project_id).await?;
        Ok(summarize(&snapshot))
    }

    pub async fn series(
        db: &DatabaseConnection,
        project_id: i64,
        kind: MetricKind,
        now: DateTime<Utc>,
    ) -> ServiceResult<ChartSeries> {
        Self::get(db, project_id).await?;
        let samples = MetricService::recent(db, project_id, Some(kind.as_str()))
            .await?
            .into_iter()
            .map(|m| VitalSample {
                value: m.value,
                timestamp: m.timestamp,
            })
            .collect::<Vec<_>>();
        Ok(build_series(kind.definition(), &samples, now))
    }
}
