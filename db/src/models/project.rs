use sea_orm::ActiveValue::Set;
use sea_orm::{PaginatorTrait, QueryOrder};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A monitored site. Projects are created by the seeder or an admin flow and
/// are never modified by the ingestion path.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::web_vital_metric::Entity")]
    WebVitalMetrics,
}

impl Related<super::web_vital_metric::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WebVitalMetrics.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(db: &DbConn, name: &str) -> Result<Model, DbErr> {
        let project = ActiveModel {
            name: Set(name.to_owned()),
            ..Default::default()
        };
        project.insert(db).await
    }

    pub async fn find_by_id(db: &DbConn, id: i64) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id).one(db).await
    }

    pub async fn exists(db: &DbConn, id: i64) -> Result<bool, DbErr> {
        Ok(Entity::find_by_id(id).count(db).await? > 0)
    }

    /// All projects ordered by id.
    pub async fn list(db: &DbConn) -> Result<Vec<Model>, DbErr> {
        Entity::find().order_by_asc(Column::Id).all(db).await
    }
}
