pub mod m202510140001_create_projects;
pub mod m202510140002_create_web_vital_metrics;
