use crate::seed::Seeder;
use chrono::{Duration, Utc};
use common::vitals::MetricKind;
use db::models::project::Model as ProjectModel;
use db::models::web_vital_metric::{Model as MetricModel, NewSample};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng, seq::SliceRandom};
use sea_orm::{DatabaseConnection, DbErr};
use std::pin::Pin;

pub struct WebVitalMetricSeeder;

const SAMPLES_PER_METRIC: i64 = 48;

const USER_AGENTS: [&str; 3] = [
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 14_5) AppleWebKit/605.1.15 Safari/605.1.15",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) Chrome/128.0 Safari/537.36",
    "Mozilla/5.0 (Linux; Android 14) Chrome/128.0 Mobile Safari/537.36",
];

const PAGES: [&str; 3] = ["/", "/pricing", "/docs"];

/// Spread factor around each threshold. The first project passes everything,
/// the second fails CLS and TTFB, the rest land wherever the jitter puts them.
fn scale_for(project_index: usize, kind: MetricKind) -> f64 {
    match (project_index, kind) {
        (0, _) => 0.6,
        (1, MetricKind::Cls | MetricKind::Ttfb) => 1.4,
        (1, _) => 0.7,
        _ => 1.0,
    }
}

impl Seeder for WebVitalMetricSeeder {
    fn seed<'a>(
        &'a self,
        db: &'a DatabaseConnection,
    ) -> Pin<Box<dyn Future<Output = Result<(), DbErr>> + Send + 'a>> {
        Box::pin(async move {
            // Send-compatible RNG
            let mut rng = StdRng::from_entropy();
            let projects = ProjectModel::list(db).await?;
            let now = Utc::now();

            for (index, project) in projects.iter().enumerate() {
                if !MetricModel::recent(db, project.id, None, 1).await?.is_empty() {
                    continue;
                }

                for kind in MetricKind::ALL {
                    let threshold = kind.definition().threshold;
                    let scale = scale_for(index, kind);

                    for step in (0..SAMPLES_PER_METRIC).rev() {
                        let jitter: f64 = rng.gen_range(0.7..1.3);
                        let page = PAGES.choose(&mut rng).copied().unwrap_or("/");
                        let user_agent = USER_AGENTS
                            .choose(&mut rng)
                            .copied()
                            .unwrap_or("seed-script");

                        MetricModel::create_at(
                            db,
                            NewSample {
                                project_id: project.id,
                                metric_type: kind.as_str().to_string(),
                                value: round_for(kind, threshold * scale * jitter),
                                user_agent: Some(user_agent.to_string()),
                                url: Some(format!("http://localhost{page}")),
                            },
                            now - Duration::minutes(step * 30),
                        )
                        .await?;
                    }
                }
            }

            Ok(())
        })
    }
}

/// CLS is a small unitless score; the timing metrics keep one decimal.
fn round_for(kind: MetricKind, value: f64) -> f64 {
    match kind {
        MetricKind::Cls => (value * 1000.0).round() / 1000.0,
        _ => (value * 10.0).round() / 10.0,
    }
}
