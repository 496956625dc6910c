use sea_orm_migration::prelude::*;

use super::m202510140001_create_projects::Projects;

#[derive(DeriveIden)]
enum WebVitalMetrics {
    Table,
    Id,
    ProjectId,
    Type,
    Value,
    UserAgent,
    Url,
    Timestamp,
}

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202510140002_create_web_vital_metrics"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WebVitalMetrics::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(WebVitalMetrics::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(WebVitalMetrics::ProjectId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(WebVitalMetrics::Type).string().not_null())
                    .col(ColumnDef::new(WebVitalMetrics::Value).double().not_null())
                    .col(ColumnDef::new(WebVitalMetrics::UserAgent).text().null())
                    .col(ColumnDef::new(WebVitalMetrics::Url).text().null())
                    .col(
                        ColumnDef::new(WebVitalMetrics::Timestamp)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_web_vital_metrics_project")
                            .from(WebVitalMetrics::Table, WebVitalMetrics::ProjectId)
                            .to(Projects::Table, Projects::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_web_vital_metrics_project_type_ts")
                    .table(WebVitalMetrics::Table)
                    .col(WebVitalMetrics::ProjectId)
                    .col(WebVitalMetrics::Type)
                    .col(WebVitalMetrics::Timestamp)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WebVitalMetrics::Table).to_owned())
            .await
    }
}
