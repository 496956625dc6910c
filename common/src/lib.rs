//! Shared Web Vitals domain logic: metric definitions, the health summary
//! engine and chart series construction. Nothing in here touches I/O.

pub mod series;
pub mod summary;
pub mod vitals;

use validator::ValidationErrors;

pub use summary::{summarize, ProjectSummary, VerdictLevel};
pub use vitals::{MetricDefinition, MetricKind, VitalSample};

/// Joins every field error message into a single `; `-separated string.
pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut messages = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(m) => m.to_string(),
                None => format!("{field} is invalid"),
            })
        })
        .collect::<Vec<_>>();
    messages.sort();
    messages.join("; ")
}
