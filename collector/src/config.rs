pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:3000/api";

/// Where to send measurements and which project they belong to.
///
/// The `vitals` binary fills this from `--endpoint`/`--project-id`, falling
/// back to `VITALS_ENDPOINT`/`VITALS_PROJECT_ID`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectorConfig {
    /// Base URL of the API, including the `/api` prefix.
    pub endpoint: String,
    pub project_id: i64,
}

impl CollectorConfig {
    pub fn new(endpoint: impl Into<String>, project_id: i64) -> Self {
        Self {
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            project_id,
        }
    }

    pub fn metrics_url(&self) -> String {
        format!("{}/metrics", self.endpoint)
    }
}
