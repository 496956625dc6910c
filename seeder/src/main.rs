use crate::seed::{Seeder, run_seeder};
use crate::seeds::{project::ProjectSeeder, web_vital_metric::WebVitalMetricSeeder};
use migration::Migrator;
use sea_orm_migration::MigratorTrait;

mod seed;
mod seeds;

#[tokio::main]
async fn main() {
    let db = db::connect().await.expect("Failed to connect to database");
    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    for (seeder, name) in [
        (Box::new(ProjectSeeder) as Box<dyn Seeder + Send + Sync>, "Project"),
        (Box::new(WebVitalMetricSeeder), "WebVitalMetric"),
    ] {
        run_seeder(&*seeder, name, &db).await;
    }
}
