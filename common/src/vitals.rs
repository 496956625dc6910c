use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The five Core Web Vitals the dashboard knows how to classify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricKind {
    Lcp,
    Cls,
    Inp,
    Fcp,
    Ttfb,
}

impl MetricKind {
    /// Display order used by the summary and the dashboard.
    pub const ALL: [MetricKind; 5] = [
        MetricKind::Lcp,
        MetricKind::Cls,
        MetricKind::Inp,
        MetricKind::Fcp,
        MetricKind::Ttfb,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MetricKind::Lcp => "lcp",
            MetricKind::Cls => "cls",
            MetricKind::Inp => "inp",
            MetricKind::Fcp => "fcp",
            MetricKind::Ttfb => "ttfb",
        }
    }

    pub fn definition(&self) -> &'static MetricDefinition {
        match self {
            MetricKind::Lcp => &DEFINITIONS[0],
            MetricKind::Cls => &DEFINITIONS[1],
            MetricKind::Inp => &DEFINITIONS[2],
            MetricKind::Fcp => &DEFINITIONS[3],
            MetricKind::Ttfb => &DEFINITIONS[4],
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MetricKind {
    type Err = String;

    /// Case-insensitive, so browser names like `LCP` map onto `lcp`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lcp" => Ok(MetricKind::Lcp),
            "cls" => Ok(MetricKind::Cls),
            "inp" => Ok(MetricKind::Inp),
            "fcp" => Ok(MetricKind::Fcp),
            "ttfb" => Ok(MetricKind::Ttfb),
            other => Err(format!("unknown metric type: {other}")),
        }
    }
}

/// Which side of the threshold counts as healthy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Lower is better: good iff `value < threshold`.
    Lt,
    /// Higher is better: good iff `value > threshold`.
    Gt,
}

impl Direction {
    pub fn is_good(&self, value: f64, threshold: f64) -> bool {
        match self {
            Direction::Lt => value < threshold,
            Direction::Gt => value > threshold,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricDefinition {
    pub kind: MetricKind,
    pub name: &'static str,
    pub unit: &'static str,
    pub display_unit: &'static str,
    pub direction: Direction,
    pub threshold: f64,
    pub threshold_label: &'static str,
    pub chart: ChartKind,
    pub color: &'static str,
}

impl MetricDefinition {
    pub fn is_good(&self, value: f64) -> bool {
        self.direction.is_good(value, self.threshold)
    }
}

pub static DEFINITIONS: [MetricDefinition; 5] = [
    MetricDefinition {
        kind: MetricKind::Lcp,
        name: "LCP (Largest Contentful Paint)",
        unit: "ms",
        display_unit: "ms",
        direction: Direction::Lt,
        threshold: 2500.0,
        threshold_label: "good below 2.5s",
        chart: ChartKind::Line,
        color: "#3b82f6",
    },
    MetricDefinition {
        kind: MetricKind::Cls,
        name: "CLS (Cumulative Layout Shift)",
        unit: "",
        display_unit: "",
        direction: Direction::Lt,
        threshold: 0.1,
        threshold_label: "good below 0.1",
        chart: ChartKind::Bar,
        color: "#22d3ee",
    },
    MetricDefinition {
        kind: MetricKind::Inp,
        name: "INP (Interaction to Next Paint)",
        unit: "ms",
        display_unit: "ms",
        direction: Direction::Lt,
        threshold: 200.0,
        threshold_label: "good below 200ms",
        chart: ChartKind::Line,
        color: "#fde047",
    },
    MetricDefinition {
        kind: MetricKind::Fcp,
        name: "FCP (First Contentful Paint)",
        unit: "ms",
        display_unit: "ms",
        direction: Direction::Lt,
        threshold: 1800.0,
        threshold_label: "good below 1.8s",
        chart: ChartKind::Line,
        color: "#f87171",
    },
    MetricDefinition {
        kind: MetricKind::Ttfb,
        name: "TTFB (Time to First Byte)",
        unit: "ms",
        display_unit: "ms",
        direction: Direction::Lt,
        threshold: 800.0,
        threshold_label: "good below 800ms",
        chart: ChartKind::Line,
        color: "#38bdf8",
    },
];

/// One stored measurement as seen by the aggregation code.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VitalSample {
    pub value: f64,
    pub timestamp: DateTime<Utc>,
}

/// Arithmetic mean; `None` for an empty slice.
pub fn mean(samples: &[VitalSample]) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }
    let total: f64 = samples.iter().map(|s| s.value).sum();
    Some(total / samples.len() as f64)
}
