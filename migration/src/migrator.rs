use sea_orm_migration::prelude::*;

use crate::migrations;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(migrations::m202510140001_create_projects::Migration),
            Box::new(migrations::m202510140002_create_web_vital_metrics::Migration),
        ]
    }
}
