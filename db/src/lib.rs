pub mod models;
pub mod test_utils;

use sea_orm::{Database, DatabaseConnection, DbErr};
use util::config;

/// Connects to the configured database. For a SQLite file the parent
/// directory is created first.
pub async fn connect() -> Result<DatabaseConnection, DbErr> {
    let path_or_url = config::database_path();

    // SQLite won't create intermediate dirs.
    if let Some(parent) = config::sqlite_file_for(&path_or_url)
        .as_deref()
        .and_then(|file| file.parent())
    {
        let _ = std::fs::create_dir_all(parent);
    }

    let url = config::database_url_for(&path_or_url);
    tracing::debug!(url = %url, "Connecting to database");
    Database::connect(&url).await
}
