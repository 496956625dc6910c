pub mod error;
pub mod metric_service;
pub mod project_service;

pub use error::ServiceError;
