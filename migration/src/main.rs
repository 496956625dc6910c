use std::{fs, path::Path};
use util::config;

mod runner;

#[tokio::main]
async fn main() {
    let db_path = config::database_path();
    let url = config::database_url_for(&db_path);
    let db_file = config::sqlite_file_for(&db_path);
    let args: Vec<String> = std::env::args().collect();

    match args.get(1).map(|s| s.as_str()) {
        Some("clean") => {
            remove_db_file(db_file.as_deref());
        }
        Some("fresh") => {
            remove_db_file(db_file.as_deref());
            create_db_dir(db_file.as_deref());
            runner::run_all_migrations(&url).await;
        }
        _ => {
            create_db_dir(db_file.as_deref());
            runner::run_all_migrations(&url).await;
        }
    }
}

fn remove_db_file(db_file: Option<&Path>) {
    match db_file {
        Some(path) if path.exists() => {
            fs::remove_file(path).expect("Failed to delete DB file");
            println!("Deleted DB: {}", path.display());
        }
        Some(path) => println!("DB file does not exist: {}", path.display()),
        None => println!("No SQLite file to delete"),
    }
}

fn create_db_dir(db_file: Option<&Path>) {
    if let Some(parent) = db_file.and_then(Path::parent) {
        fs::create_dir_all(parent).expect("Failed to create DB directory");
    }
}
