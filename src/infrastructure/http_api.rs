// reqwest implementation of the ThermaSense API
use crate::application::therma_api::{ApiError, ThermaApi, VoteSubmission};
use crate::domain::vote::VoteStats;
use crate::domain::zone::{Zone, ZoneStatus};
use anyhow::Context;
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct HttpThermaApi {
    base_url: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

impl HttpThermaApi {
    pub fn new(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn zone_url(&self, zone_id: &str, leaf: &str) -> String {
        format!(
            "{}/api/zones/{}/{}",
            self.base_url,
            urlencoding::encode(zone_id),
            leaf
        )
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        tracing::debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let response = ensure_success(response).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Map a non-2xx response to `ApiError::Status`, keeping a string `detail`.
async fn ensure_success(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Status {
        status: status.as_u16(),
        detail: extract_detail(&body),
    })
}

// FastAPI validation errors carry a list in `detail`; only plain strings are shown
fn extract_detail(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    match parsed.detail? {
        serde_json::Value::String(detail) if !detail.trim().is_empty() => Some(detail),
        _ => None,
    }
}

#[async_trait]
impl ThermaApi for HttpThermaApi {
    async fn list_zones(&self) -> Result<Vec<Zone>, ApiError> {
        let url = format!("{}/api/zones/", self.base_url);
        self.get_json(&url).await
    }

    async fn zone_status(&self, zone_id: &str) -> Result<ZoneStatus, ApiError> {
        self.get_json(&self.zone_url(zone_id, "status")).await
    }

    async fn zone_stats(&self, zone_id: &str) -> Result<VoteStats, ApiError> {
        self.get_json(&self.zone_url(zone_id, "stats")).await
    }

    async fn submit_vote(&self, vote: &VoteSubmission) -> Result<(), ApiError> {
        let url = format!("{}/api/vote/", self.base_url);
        tracing::debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .json(vote)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        ensure_success(response).await?;
        Ok(())
    }
}
