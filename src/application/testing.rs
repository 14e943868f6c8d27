// In-memory ThermaApi for controller and engine tests
use crate::application::therma_api::{ApiError, ThermaApi, VoteSubmission};
use crate::domain::vote::VoteStats;
use crate::domain::zone::{Zone, ZoneStatus};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    ListZones,
    Status(String),
    Stats(String),
    Vote(VoteSubmission),
}

struct FakeState {
    zones: Result<Vec<Zone>, ApiError>,
    status: HashMap<String, Result<ZoneStatus, ApiError>>,
    stats: HashMap<String, Result<VoteStats, ApiError>>,
    vote: Result<(), ApiError>,
    delays: HashMap<String, Duration>,
    calls: Vec<ApiCall>,
}

pub struct FakeApi {
    state: Mutex<FakeState>,
}

fn not_found() -> ApiError {
    ApiError::Status {
        status: 404,
        detail: Some("Zone not found".to_string()),
    }
}

impl FakeApi {
    /// Zones that all answer with a named status and empty stats
    pub fn with_zones(zones: &[(&str, &str)]) -> Self {
        let mut status = HashMap::new();
        let mut stats = HashMap::new();
        for (id, name) in zones {
            status.insert(id.to_string(), Ok(ZoneStatus::new(*name, Some(21.0), Some(22.0))));
            stats.insert(id.to_string(), Ok(VoteStats::default()));
        }

        Self {
            state: Mutex::new(FakeState {
                zones: Ok(zones.iter().map(|(id, name)| Zone::new(*id, *name)).collect()),
                status,
                stats,
                vote: Ok(()),
                delays: HashMap::new(),
                calls: Vec::new(),
            }),
        }
    }

    pub fn set_zones(&self, zones: Result<Vec<Zone>, ApiError>) {
        self.state.lock().unwrap().zones = zones;
    }

    pub fn set_status(&self, zone_id: &str, status: Result<ZoneStatus, ApiError>) {
        self.state.lock().unwrap().status.insert(zone_id.to_string(), status);
    }

    pub fn set_stats(&self, zone_id: &str, stats: Result<VoteStats, ApiError>) {
        self.state.lock().unwrap().stats.insert(zone_id.to_string(), stats);
    }

    pub fn set_vote_result(&self, result: Result<(), ApiError>) {
        self.state.lock().unwrap().vote = result;
    }

    /// Delay both reads for `zone_id`
    pub fn set_delay(&self, zone_id: &str, delay: Duration) {
        self.state.lock().unwrap().delays.insert(zone_id.to_string(), delay);
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn status_calls(&self, zone_id: &str) -> usize {
        self.calls()
            .iter()
            .filter(|call| matches!(call, ApiCall::Status(id) if id == zone_id))
            .count()
    }

    fn record(&self, call: ApiCall) {
        self.state.lock().unwrap().calls.push(call);
    }

    fn delay_for(&self, zone_id: &str) -> Option<Duration> {
        self.state.lock().unwrap().delays.get(zone_id).copied()
    }
}

#[async_trait]
impl ThermaApi for FakeApi {
    async fn list_zones(&self) -> Result<Vec<Zone>, ApiError> {
        self.record(ApiCall::ListZones);
        self.state.lock().unwrap().zones.clone()
    }

    async fn zone_status(&self, zone_id: &str) -> Result<ZoneStatus, ApiError> {
        self.record(ApiCall::Status(zone_id.to_string()));
        if let Some(delay) = self.delay_for(zone_id) {
            tokio::time::sleep(delay).await;
        }
        let state = self.state.lock().unwrap();
        state.status.get(zone_id).cloned().unwrap_or_else(|| Err(not_found()))
    }

    async fn zone_stats(&self, zone_id: &str) -> Result<VoteStats, ApiError> {
        self.record(ApiCall::Stats(zone_id.to_string()));
        if let Some(delay) = self.delay_for(zone_id) {
            tokio::time::sleep(delay).await;
        }
        let state = self.state.lock().unwrap();
        state.stats.get(zone_id).cloned().unwrap_or_else(|| Err(not_found()))
    }

    async fn submit_vote(&self, vote: &VoteSubmission) -> Result<(), ApiError> {
        self.record(ApiCall::Vote(vote.clone()));
        self.state.lock().unwrap().vote.clone()
    }
}
