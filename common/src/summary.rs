//! Project health rollup.
//!
//! Every known metric type with at least one sample is averaged and checked
//! against its threshold. Types without samples are left out of the rollup
//! entirely, so a project with partial instrumentation is judged only on
//! what it reports.

use crate::vitals::{mean, MetricKind, VitalSample};
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VerdictLevel {
    Unknown,
    Good,
    Warn,
    Bad,
}

impl VerdictLevel {
    pub fn icon(&self) -> &'static str {
        match self {
            VerdictLevel::Unknown => "❓",
            VerdictLevel::Good => "✅",
            VerdictLevel::Warn => "⚠️",
            VerdictLevel::Bad => "⛔",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            VerdictLevel::Unknown => "gray",
            VerdictLevel::Good => "green",
            VerdictLevel::Warn => "yellow",
            VerdictLevel::Bad => "red",
        }
    }
}

/// A present metric that missed its threshold.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FailingMetric {
    pub kind: MetricKind,
    pub name: &'static str,
    pub average: f64,
    /// Average rendered as `{:.2}` followed by the display unit.
    pub formatted: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricDetail {
    pub kind: MetricKind,
    pub name: &'static str,
    pub average: f64,
    pub display_unit: &'static str,
    pub is_good: bool,
    pub icon: &'static str,
    pub color: &'static str,
    pub threshold: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectSummary {
    pub level: VerdictLevel,
    pub text: String,
    pub icon: &'static str,
    pub color: &'static str,
    pub failing: Vec<FailingMetric>,
    pub details: Vec<MetricDetail>,
}

impl ProjectSummary {
    fn new(
        level: VerdictLevel,
        text: String,
        failing: Vec<FailingMetric>,
        details: Vec<MetricDetail>,
    ) -> Self {
        Self {
            level,
            text,
            icon: level.icon(),
            color: level.color(),
            failing,
            details,
        }
    }
}

/// Averages each metric type, classifies it, and rolls the results up into
/// one verdict.
pub fn summarize(samples: &HashMap<MetricKind, Vec<VitalSample>>) -> ProjectSummary {
    let mut details = Vec::new();
    let mut failing = Vec::new();

    for kind in MetricKind::ALL {
        let Some(average) = samples.get(&kind).and_then(|s| mean(s)) else {
            continue;
        };
        let def = kind.definition();
        let is_good = def.is_good(average);
        let level = if is_good { VerdictLevel::Good } else { VerdictLevel::Warn };

        details.push(MetricDetail {
            kind,
            name: def.name,
            average,
            display_unit: def.display_unit,
            is_good,
            icon: level.icon(),
            color: level.color(),
            threshold: def.threshold_label,
        });

        if !is_good {
            failing.push(FailingMetric {
                kind,
                name: def.name,
                average,
                formatted: format!("{average:.2}{}", def.display_unit),
            });
        }
    }

    let total = details.len();
    let good = total - failing.len();

    if total == 0 {
        return ProjectSummary::new(
            VerdictLevel::Unknown,
            "No data yet".into(),
            Vec::new(),
            Vec::new(),
        );
    }
    if good == total {
        return ProjectSummary::new(
            VerdictLevel::Good,
            "Overall performance is good".into(),
            failing,
            details,
        );
    }
    if good == 0 {
        return ProjectSummary::new(
            VerdictLevel::Bad,
            "All core metrics are below target".into(),
            failing,
            details,
        );
    }

    let listed = failing
        .iter()
        .map(|f| format!("{} ({})", f.name, f.formatted))
        .collect::<Vec<_>>()
        .join(", ");
    ProjectSummary::new(
        VerdictLevel::Warn,
        format!("Some metrics need attention: {listed}"),
        failing,
        details,
    )
}
