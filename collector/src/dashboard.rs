use crate::error::CollectorError;
use crate::reporter::read_envelope;
use chrono::Utc;
use common::series::{ChartSeries, build_series};
use common::{MetricKind, ProjectSummary, VitalSample, summarize};
use futures::future::try_join_all;
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProjectInfo {
    pub id: i64,
    pub name: String,
}

/// Identifies one load: which project was asked for and when.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadRequest {
    pub project_id: i64,
    pub generation: u64,
}

/// Raw samples for every vital of one project, newest first.
#[derive(Debug, Clone)]
pub struct ProjectData {
    pub request: LoadRequest,
    pub samples: HashMap<MetricKind, Vec<VitalSample>>,
}

impl ProjectData {
    pub fn summary(&self) -> ProjectSummary {
        summarize(&self.samples)
    }

    pub fn series(&self, kind: MetricKind) -> ChartSeries {
        let samples = self
            .samples
            .get(&kind)
            .map(Vec::as_slice)
            .unwrap_or(&[]);
        build_series(kind.definition(), samples, Utc::now())
    }
}

/// Reads projects and samples back from the API.
#[derive(Debug, Clone)]
pub struct DashboardClient {
    client: reqwest::Client,
    endpoint: String,
}

impl DashboardClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
        }
    }

    pub async fn projects(&self) -> Result<Vec<ProjectInfo>, CollectorError> {
        let res = self
            .client
            .get(format!("{}/projects", self.endpoint))
            .send()
            .await?;
        read_envelope(res).await
    }

    pub async fn samples(
        &self,
        project_id: i64,
        kind: MetricKind,
    ) -> Result<Vec<VitalSample>, CollectorError> {
        let res = self
            .client
            .get(format!("{}/metrics", self.endpoint))
            .query(&[
                ("projectId", project_id.to_string()),
                ("type", kind.as_str().to_string()),
            ])
            .send()
            .await?;
        read_envelope(res).await
    }

    /// Fetches all five vitals concurrently. Fails if any one fetch fails.
    pub async fn load(&self, request: LoadRequest) -> Result<ProjectData, CollectorError> {
        let fetches = MetricKind::ALL.into_iter().map(|kind| async move {
            let samples = self.samples(request.project_id, kind).await?;
            Ok::<_, CollectorError>((kind, samples))
        });
        let samples = try_join_all(fetches).await?.into_iter().collect();

        Ok(ProjectData { request, samples })
    }
}

/// Selection state of a dashboard view.
///
/// Every selection bumps the generation; a response is only applied when it
/// answers the latest selection, so a slow load for a previous project can
/// never overwrite the current one.
#[derive(Debug, Default)]
pub struct DashboardState {
    selected: Option<i64>,
    generation: u64,
    data: Option<ProjectData>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, project_id: i64) -> LoadRequest {
        self.generation += 1;
        self.selected = Some(project_id);
        self.data = None;
        LoadRequest {
            project_id,
            generation: self.generation,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.selected.is_some() && self.data.is_none()
    }

    pub fn data(&self) -> Option<&ProjectData> {
        self.data.as_ref()
    }

    /// Returns `false` and drops `data` if it is stale.
    pub fn apply(&mut self, data: ProjectData) -> bool {
        let current = self.selected == Some(data.request.project_id)
            && self.generation == data.request.generation;
        if !current {
            tracing::debug!(
                project_id = data.request.project_id,
                generation = data.request.generation,
                "Discarding stale dashboard response"
            );
            return false;
        }
        self.data = Some(data);
        true
    }

    /// Summary of the applied data; `unknown` while nothing is loaded.
    pub fn summary(&self) -> ProjectSummary {
        match &self.data {
            Some(data) => data.summary(),
            None => summarize(&HashMap::new()),
        }
    }
}
