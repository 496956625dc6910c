use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use collector::config::{CollectorConfig, DEFAULT_ENDPOINT};
use collector::dashboard::{DashboardClient, DashboardState};
use collector::{Measurement, Reporter};
use colored::{Color, Colorize};
use common::MetricKind;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "vitals", version, about = "Report and inspect Web Vitals")]
struct Args {
    /// API base URL, including the /api prefix
    #[arg(long, env = "VITALS_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    endpoint: String,
    /// Project the measurements belong to
    #[arg(long, env = "VITALS_PROJECT_ID")]
    project_id: Option<i64>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Send one measurement
    Report {
        /// Metric name, e.g. LCP
        #[arg(long = "type")]
        metric: String,
        #[arg(long)]
        value: f64,
        #[arg(long)]
        url: Option<String>,
        #[arg(long)]
        user_agent: Option<String>,
    },
    /// List known projects
    Projects,
    /// Print the health summary of the project
    Summary,
    /// Print the chart series of one metric
    Series {
        #[arg(long = "type")]
        metric: MetricKind,
    },
}

impl Args {
    fn collector_config(&self) -> Result<CollectorConfig> {
        match self.project_id {
            Some(id) => Ok(CollectorConfig::new(&self.endpoint, id)),
            None => bail!("--project-id or VITALS_PROJECT_ID is required"),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("collector=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let args = Args::parse();
    let dashboard = DashboardClient::new(&args.endpoint);

    match &args.command {
        Command::Report {
            metric,
            value,
            url,
            user_agent,
        } => {
            let reporter = Reporter::new(args.collector_config()?);
            let measurement = Measurement::new(metric.as_str(), *value)
                .with_context(user_agent.clone(), url.clone());
            let id = reporter
                .report(&measurement)
                .await
                .context("report failed")?;
            println!(
                "{} stored {} = {} as #{}",
                "✔".green(),
                measurement.name,
                measurement.value,
                id
            );
        }
        Command::Projects => {
            let projects = dashboard
                .projects()
                .await
                .context("failed to list projects")?;
            for project in projects {
                println!("{:>4}  {}", project.id.to_string().bold(), project.name);
            }
        }
        Command::Summary => {
            let config = args.collector_config()?;
            let mut state = DashboardState::new();
            let request = state.select(config.project_id);
            let data = dashboard
                .load(request)
                .await
                .context("failed to load metrics")?;
            state.apply(data);

            let summary = state.summary();
            let headline = summary.text.color(tag_color(summary.color)).bold();
            println!("{} {}", summary.icon, headline);
            for detail in &summary.details {
                println!(
                    "  {} {:<36} {:>10.2}{:<3} target {}",
                    detail.icon,
                    detail.name,
                    detail.average,
                    detail.display_unit,
                    detail.threshold.dimmed()
                );
            }
        }
        Command::Series { metric } => {
            let config = args.collector_config()?;
            let samples = dashboard
                .samples(config.project_id, *metric)
                .await
                .context("failed to load metrics")?;
            let series = common::series::build_series(
                metric.definition(),
                &samples,
                chrono::Utc::now(),
            );

            println!("{}  {}", series.title.bold(), series.subtitle.dimmed());
            for point in &series.points {
                let deviation = point
                    .deviation_pct
                    .map(|d| format!("{d:+.1}%"))
                    .unwrap_or_default();
                println!(
                    "  {:>10}  {:>10.2}{:<3} {}",
                    point.label, point.value, series.unit, deviation
                );
            }
        }
    }

    Ok(())
}

fn tag_color(tag: &str) -> Color {
    match tag {
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "red" => Color::Red,
        _ => Color::BrightBlack,
    }
}
