// Refresh engine - Joined status + stats fetch for one zone
use crate::application::therma_api::{ApiError, ThermaApi};
use crate::domain::vote::VoteStats;
use crate::domain::zone::ZoneStatus;
use futures::future::BoxFuture;
use futures::FutureExt;
use std::sync::Arc;

/// Status and stats taken from one joined pair of responses
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneSnapshot {
    pub status: ZoneStatus,
    pub stats: VoteStats,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RefreshOutcome {
    pub zone_id: String,
    pub result: Result<ZoneSnapshot, ApiError>,
}

#[derive(Clone)]
pub struct RefreshEngine {
    api: Arc<dyn ThermaApi>,
}

impl RefreshEngine {
    pub fn new(api: Arc<dyn ThermaApi>) -> Self {
        Self { api }
    }

    /// Build the refresh for `zone_id`.
    ///
    /// Both requests are issued together and the refresh only succeeds when
    /// both do. The returned future owns everything it needs, so callers can
    /// keep several refreshes in flight at once.
    pub fn refresh(&self, zone_id: &str) -> BoxFuture<'static, RefreshOutcome> {
        let api = self.api.clone();
        let zone_id = zone_id.to_string();

        async move {
            tracing::debug!("Refreshing zone {}", zone_id);
            let result = tokio::try_join!(api.zone_status(&zone_id), api.zone_stats(&zone_id))
                .map(|(status, stats)| ZoneSnapshot { status, stats });
            RefreshOutcome { zone_id, result }
        }
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::FakeApi;

    #[tokio::test]
    async fn test_refresh_joins_status_and_stats() {
        let api = Arc::new(FakeApi::with_zones(&[("z1", "Lab")]));
        api.set_status("z1", Ok(ZoneStatus::new("Lab", Some(21.0), Some(22.5))));
        api.set_stats("z1", Ok(VoteStats::new(1, 2, 3)));

        let outcome = RefreshEngine::new(api).refresh("z1").await;

        assert_eq!(outcome.zone_id, "z1");
        let snapshot = outcome.result.unwrap();
        assert_eq!(snapshot.status.recommended_temp, Some(22.5));
        assert_eq!(snapshot.stats, VoteStats::new(1, 2, 3));
    }

    #[tokio::test]
    async fn test_refresh_fails_when_either_request_fails() {
        let api = Arc::new(FakeApi::with_zones(&[("z1", "Lab")]));
        api.set_status("z1", Ok(ZoneStatus::new("Lab", Some(21.0), None)));
        api.set_stats(
            "z1",
            Err(ApiError::Status {
                status: 503,
                detail: None,
            }),
        );

        let outcome = RefreshEngine::new(api.clone()).refresh("z1").await;
        assert!(outcome.result.is_err());

        api.set_status("z1", Err(ApiError::Transport("reset".to_string())));
        api.set_stats("z1", Ok(VoteStats::default()));
        let outcome = RefreshEngine::new(api).refresh("z1").await;
        assert_eq!(
            outcome.result,
            Err(ApiError::Transport("reset".to_string()))
        );
    }
}
