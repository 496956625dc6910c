//! Client side of the Web Vitals pipeline: a reporter that posts browser
//! measurements to the API, a callback registry that wires measurements to
//! the reporter, and a dashboard client that turns stored samples back into
//! a health summary and chart series.

pub mod config;
pub mod dashboard;
pub mod error;
pub mod reporter;
pub mod vitals;

pub use config::CollectorConfig;
pub use error::CollectorError;
pub use reporter::{Measurement, Reporter};
pub use vitals::VitalsObserver;
