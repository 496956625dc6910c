pub mod project;
pub mod web_vital_metric;
