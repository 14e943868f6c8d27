// Port for the ThermaSense backend API
use crate::domain::vote::{VoteStats, VoteValue};
use crate::domain::zone::{Zone, ZoneStatus};
use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("server responded with status {status}")]
    Status { status: u16, detail: Option<String> },

    #[error("unreadable response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Human-readable failure detail: the server's `detail` verbatim when it
    /// sent one, otherwise a status-code message.
    pub fn detail_message(&self) -> String {
        match self {
            ApiError::Status {
                detail: Some(detail),
                ..
            } => detail.clone(),
            ApiError::Status {
                status,
                detail: None,
            } => format!("server error: {}", status),
            other => other.to_string(),
        }
    }
}

/// Body of `POST /api/vote/`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VoteSubmission {
    pub user_id: String,
    pub zone_id: String,
    pub vote_value: VoteValue,
}

#[async_trait]
pub trait ThermaApi: Send + Sync {
    /// List every selectable zone
    async fn list_zones(&self) -> Result<Vec<Zone>, ApiError>;

    /// Current and recommended temperature for a zone
    async fn zone_status(&self, zone_id: &str) -> Result<ZoneStatus, ApiError>;

    /// Aggregate vote counts for a zone
    async fn zone_stats(&self, zone_id: &str) -> Result<VoteStats, ApiError>;

    /// Submit one vote. The response body is ignored on success.
    async fn submit_vote(&self, vote: &VoteSubmission) -> Result<(), ApiError>;
}
