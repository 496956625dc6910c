use crate::config::CollectorConfig;
use crate::error::CollectorError;
use serde::{Deserialize, Serialize};

/// One value observed by the browser instrumentation.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    /// Metric name as the instrumentation reports it, e.g. `LCP`.
    pub name: String,
    pub value: f64,
    pub user_agent: Option<String>,
    pub url: Option<String>,
}

impl Measurement {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
            user_agent: None,
            url: None,
        }
    }

    pub fn with_context(mut self, user_agent: Option<String>, url: Option<String>) -> Self {
        self.user_agent = user_agent;
        self.url = url;
        self
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ReportBody<'a> {
    project_id: i64,
    #[serde(rename = "type")]
    metric_type: String,
    value: f64,
    user_agent: Option<&'a str>,
    url: Option<&'a str>,
}

/// The API's `{success, data, message}` envelope.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(default)]
    pub message: String,
}

impl<T> Envelope<T> {
    pub(crate) fn into_result(self, status: u16) -> Result<T, CollectorError> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            _ => Err(CollectorError::Rejected {
                status,
                message: self.message,
            }),
        }
    }
}

pub(crate) async fn read_envelope<T>(res: reqwest::Response) -> Result<T, CollectorError>
where
    T: for<'de> Deserialize<'de>,
{
    let status = res.status().as_u16();
    let envelope: Envelope<T> = res.json().await?;
    envelope.into_result(status)
}

/// Posts measurements to `POST {endpoint}/metrics` for the configured project.
#[derive(Debug, Clone)]
pub struct Reporter {
    client: reqwest::Client,
    config: CollectorConfig,
}

impl Reporter {
    pub fn new(config: CollectorConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Sends one measurement. The metric name is lowercased to match the
    /// stored type names. Returns the id the server assigned.
    pub async fn report(&self, measurement: &Measurement) -> Result<i64, CollectorError> {
        let body = ReportBody {
            project_id: self.config.project_id,
            metric_type: measurement.name.to_lowercase(),
            value: measurement.value,
            user_agent: measurement.user_agent.as_deref(),
            url: measurement.url.as_deref(),
        };

        let res = self
            .client
            .post(self.config.metrics_url())
            .json(&body)
            .send()
            .await?;

        #[derive(Deserialize)]
        struct Created {
            id: i64,
        }

        let created: Created = read_envelope(res).await?;
        tracing::debug!(id = created.id, metric = %body.metric_type, "Reported measurement");
        Ok(created.id)
    }
}
