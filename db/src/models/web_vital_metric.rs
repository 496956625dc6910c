//! Raw Web Vitals samples, one row per browser report.
//!
//! Samples are append-only: the system inserts them and reads them back
//! newest-first, and never updates or deletes an individual row.

use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::{QueryOrder, QuerySelect};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "web_vital_metrics")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub project_id: i64,
    /// Metric name as reported (`lcp`, `cls`, ...). Unknown names are kept.
    #[sea_orm(column_name = "type")]
    #[serde(rename = "type")]
    pub metric_type: String,
    pub value: f64,
    pub user_agent: Option<String>,
    pub url: Option<String>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::project::Entity",
        from = "Column::ProjectId",
        to = "super::project::Column::Id",
        on_delete = "Cascade"
    )]
    Project,
}

impl Related<super::project::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Project.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Fields supplied by a reporter; the id and timestamp are assigned on insert.
#[derive(Debug, Clone)]
pub struct NewSample {
    pub project_id: i64,
    pub metric_type: String,
    pub value: f64,
    pub user_agent: Option<String>,
    pub url: Option<String>,
}

impl Model {
    pub async fn create(db: &DbConn, sample: NewSample) -> Result<Model, DbErr> {
        Self::create_at(db, sample, Utc::now()).await
    }

    /// Inserts a sample with an explicit capture time. Used by the seeder to
    /// backfill history; the ingestion path always goes through [`Model::create`].
    pub async fn create_at(
        db: &DbConn,
        sample: NewSample,
        timestamp: DateTime<Utc>,
    ) -> Result<Model, DbErr> {
        let active = ActiveModel {
            project_id: Set(sample.project_id),
            metric_type: Set(sample.metric_type),
            value: Set(sample.value),
            user_agent: Set(sample.user_agent),
            url: Set(sample.url),
            timestamp: Set(timestamp),
            ..Default::default()
        };
        active.insert(db).await
    }

    /// Most recent samples for a project, newest first, capped at `limit`.
    ///
    /// Rows sharing a timestamp are ordered by descending id so the result
    /// follows insertion order.
    pub async fn recent(
        db: &DbConn,
        project_id: i64,
        metric_type: Option<&str>,
        limit: u64,
    ) -> Result<Vec<Model>, DbErr> {
        let mut query = Entity::find().filter(Column::ProjectId.eq(project_id));
        if let Some(metric_type) = metric_type {
            query = query.filter(Column::MetricType.eq(metric_type));
        }

        query
            .order_by_desc(Column::Timestamp)
            .order_by_desc(Column::Id)
            .limit(limit)
            .all(db)
            .await
    }
}
