// View controller - Zone loading, voting, polling and the voting/dashboard state machine
use crate::application::poll_timer::PollTimer;
use crate::application::refresh_engine::{RefreshEngine, RefreshOutcome};
use crate::application::therma_api::{ApiError, ThermaApi, VoteSubmission};
use crate::domain::view::ViewState;
use crate::domain::vote::{VoteStats, VoteValue};
use crate::domain::zone::{Zone, ZoneStatus};
use chrono::{DateTime, Local};
use futures::future::BoxFuture;
use futures::stream::FuturesUnordered;
use futures::StreamExt;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(5);

/// User-visible failures. `Display` is the message shown under the view.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ViewError {
    #[error("Error: unable to load zone list ({0})")]
    ZoneList(ApiError),

    #[error("Refresh failed: unable to load zone data ({0})")]
    Refresh(ApiError),

    #[error("Vote failed: {0}")]
    Vote(String),
}

/// What a call to [`ViewController::poll`] did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Progress {
    /// The polling timer fired and a refresh was issued for this zone
    Ticked { zone_id: Option<String> },
    /// A refresh finished and its data was committed
    Refreshed { zone_id: String },
    /// A refresh failed; previously committed data is untouched
    RefreshFailed { zone_id: String },
}

/// Borrowed view of everything the screen needs
#[derive(Debug, Clone, Copy)]
pub struct ViewSnapshot<'a> {
    pub zones: &'a [Zone],
    pub selected_zone: Option<&'a str>,
    pub view: ViewState,
    pub status: Option<&'a ZoneStatus>,
    pub stats: &'a VoteStats,
    pub last_refreshed: Option<DateTime<Local>>,
    pub message: Option<&'a ViewError>,
}

pub struct ViewController<T: PollTimer> {
    user_id: String,
    api: Arc<dyn ThermaApi>,
    engine: RefreshEngine,
    timer: T,
    poll_interval: Duration,
    zones: Vec<Zone>,
    selected_zone: Option<String>,
    view: ViewState,
    status: Option<ZoneStatus>,
    stats: VoteStats,
    last_refreshed: Option<DateTime<Local>>,
    message: Option<ViewError>,
    in_flight: FuturesUnordered<BoxFuture<'static, RefreshOutcome>>,
}

impl<T: PollTimer> ViewController<T> {
    pub fn new(user_id: String, api: Arc<dyn ThermaApi>, timer: T, poll_interval: Duration) -> Self {
        Self {
            user_id,
            engine: RefreshEngine::new(api.clone()),
            api,
            timer,
            poll_interval,
            zones: Vec::new(),
            selected_zone: None,
            view: ViewState::Voting,
            status: None,
            stats: VoteStats::default(),
            last_refreshed: None,
            message: None,
            in_flight: FuturesUnordered::new(),
        }
    }

    /// Load the zone list once and auto-select the first zone.
    pub async fn mount(&mut self) {
        match self.api.list_zones().await {
            Ok(zones) => {
                tracing::info!("Loaded {} zones", zones.len());
                self.zones = zones;
                if self.selected_zone.is_none() {
                    if let Some(first) = self.zones.first() {
                        let zone_id = first.zone_id.clone();
                        self.assign_zone(zone_id);
                    }
                }
            }
            Err(err) => {
                tracing::warn!("Failed to load zone list: {}", err);
                self.message = Some(ViewError::ZoneList(err));
            }
        }
    }

    /// Switch zones: back to voting, clear the message, refetch immediately.
    pub fn select_zone(&mut self, zone_id: &str) {
        self.leave_dashboard();
        self.message = None;
        self.assign_zone(zone_id.to_string());
    }

    pub fn return_to_voting(&mut self) {
        self.leave_dashboard();
    }

    /// Submit a vote for the selected zone. Ignored when no zone is selected.
    pub async fn submit_vote(&mut self, value: VoteValue) {
        let Some(zone_id) = self.selected_zone.clone() else {
            tracing::debug!("Ignoring vote, no zone selected");
            return;
        };

        self.message = None;
        let vote = VoteSubmission {
            user_id: self.user_id.clone(),
            zone_id,
            vote_value: value,
        };

        match self.api.submit_vote(&vote).await {
            Ok(()) => {
                tracing::info!("Vote {} accepted for zone {}", value.as_i8(), vote.zone_id);
                self.enter_dashboard();
                self.issue_refresh(&vote.zone_id);
            }
            Err(err) => {
                tracing::error!(error = ?err, "Vote submission failed");
                self.message = Some(ViewError::Vote(err.detail_message()));
            }
        }
    }

    /// Wait for the next timer tick or refresh completion and apply it.
    ///
    /// Never completes while the timer is stopped and nothing is in flight.
    /// Cancel-safe, so it can sit in a `select!` next to input handling.
    pub async fn poll(&mut self) -> Progress {
        tokio::select! {
            biased;
            Some(outcome) = self.in_flight.next(), if !self.in_flight.is_empty() => {
                self.commit(outcome)
            }
            _ = self.timer.tick() => self.on_tick(),
        }
    }

    /// Commit every in-flight refresh, in completion order
    pub async fn settle(&mut self) -> Vec<Progress> {
        let mut applied = Vec::new();
        while let Some(outcome) = self.in_flight.next().await {
            applied.push(self.commit(outcome));
        }
        applied
    }

    /// Stop polling. In-flight reads are left to finish on their own.
    pub fn teardown(&mut self) {
        self.timer.stop();
    }

    pub fn snapshot(&self) -> ViewSnapshot<'_> {
        ViewSnapshot {
            zones: &self.zones,
            selected_zone: self.selected_zone.as_deref(),
            view: self.view,
            status: self.status.as_ref(),
            stats: &self.stats,
            last_refreshed: self.last_refreshed,
            message: self.message.as_ref(),
        }
    }

    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    pub fn selected_zone(&self) -> Option<&str> {
        self.selected_zone.as_deref()
    }

    pub fn view(&self) -> ViewState {
        self.view
    }

    pub fn status(&self) -> Option<&ZoneStatus> {
        self.status.as_ref()
    }

    pub fn stats(&self) -> &VoteStats {
        &self.stats
    }

    pub fn message(&self) -> Option<&ViewError> {
        self.message.as_ref()
    }

    pub fn is_polling(&self) -> bool {
        self.timer.is_active()
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }

    fn assign_zone(&mut self, zone_id: String) {
        self.issue_refresh(&zone_id);
        self.selected_zone = Some(zone_id);
    }

    fn enter_dashboard(&mut self) {
        if !self.view.is_dashboard() {
            self.view = ViewState::Dashboard;
            self.timer.start(self.poll_interval);
        }
    }

    fn leave_dashboard(&mut self) {
        self.view = ViewState::Voting;
        self.timer.stop();
    }

    fn issue_refresh(&mut self, zone_id: &str) {
        self.in_flight.push(self.engine.refresh(zone_id));
    }

    fn on_tick(&mut self) -> Progress {
        let zone_id = self.selected_zone.clone();
        if self.view.is_dashboard() {
            if let Some(zone_id) = &zone_id {
                self.issue_refresh(zone_id);
            }
        }
        Progress::Ticked { zone_id }
    }

    // Outcomes are applied in completion order; an older refresh finishing
    // late overwrites a newer one.
    fn commit(&mut self, outcome: RefreshOutcome) -> Progress {
        match outcome.result {
            Ok(snapshot) => {
                tracing::debug!("Committed refresh for zone {}", outcome.zone_id);
                self.status = Some(snapshot.status);
                self.stats = snapshot.stats;
                self.last_refreshed = Some(Local::now());
                Progress::Refreshed {
                    zone_id: outcome.zone_id,
                }
            }
            Err(err) => {
                tracing::warn!("Refresh for zone {} failed: {}", outcome.zone_id, err);
                self.message = Some(ViewError::Refresh(err));
                Progress::RefreshFailed {
                    zone_id: outcome.zone_id,
                }
            }
        }
    }
}
