//! Chart series for a single metric.

use crate::vitals::{mean, ChartKind, MetricDefinition, MetricKind, VitalSample};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub timestamp: DateTime<Utc>,
    /// Relative age of the sample, e.g. `5m ago`.
    pub label: String,
    pub value: f64,
    /// Percentage above (+) or below (-) the series mean. `None` when the
    /// mean is zero and the ratio is undefined.
    pub deviation_pct: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub kind: MetricKind,
    pub title: &'static str,
    pub subtitle: String,
    pub chart: ChartKind,
    pub color: &'static str,
    pub unit: &'static str,
    pub average: f64,
    /// Oldest first, so the most recent sample renders rightmost.
    pub points: Vec<ChartPoint>,
}

/// Builds the chart series from samples ordered newest-first, as returned
/// by the metrics query.
pub fn build_series(
    def: &MetricDefinition,
    newest_first: &[VitalSample],
    now: DateTime<Utc>,
) -> ChartSeries {
    let average = mean(newest_first).unwrap_or(0.0);

    let points = newest_first
        .iter()
        .rev()
        .map(|s| ChartPoint {
            timestamp: s.timestamp,
            label: relative_label(s.timestamp, now),
            value: s.value,
            deviation_pct: deviation_pct(s.value, average),
        })
        .collect();

    ChartSeries {
        kind: def.kind,
        title: def.name,
        subtitle: format!("Average: {average:.2}{}", def.unit),
        chart: def.chart,
        color: def.color,
        unit: def.unit,
        average,
        points,
    }
}

pub fn deviation_pct(value: f64, average: f64) -> Option<f64> {
    if average == 0.0 {
        return None;
    }
    Some((value - average) / average * 100.0)
}

/// Coarse relative age: `just now`, minutes, hours, then days. Timestamps in
/// the future are treated as `just now`.
pub fn relative_label(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let minutes = (now - timestamp).num_minutes();
    if minutes < 1 {
        return "just now".into();
    }
    if minutes < 60 {
        return format!("{minutes}m ago");
    }
    if minutes < 24 * 60 {
        return format!("{}h ago", minutes / 60);
    }
    format!("{}d ago", minutes / (24 * 60))
}
