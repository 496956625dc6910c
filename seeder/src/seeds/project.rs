use crate::seed::Seeder;
use db::models::project::Model as ProjectModel;
use sea_orm::{DatabaseConnection, DbErr};
use std::pin::Pin;

pub struct ProjectSeeder;

pub const PROJECT_NAMES: [&str; 3] = ["Demo Project", "Marketing Site", "Checkout"];

impl Seeder for ProjectSeeder {
    fn seed<'a>(
        &'a self,
        db: &'a DatabaseConnection,
    ) -> Pin<Box<dyn Future<Output = Result<(), DbErr>> + Send + 'a>> {
        Box::pin(async move {
            let existing = ProjectModel::list(db).await?;
            for name in PROJECT_NAMES {
                if existing.iter().any(|p| p.name == name) {
                    continue;
                }
                ProjectModel::create(db, name).await?;
            }
            Ok(())
        })
    }
}
