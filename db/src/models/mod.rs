pub mod project;
pub mod web_vital_metric;

pub use project::Entity as Project;
pub use web_vital_metric::Entity as WebVitalMetric;
