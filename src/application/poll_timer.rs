// Schedulable polling timer port
use async_trait::async_trait;
use std::time::Duration;

/// A restartable fixed-period timer.
///
/// At most one schedule is live: `start` replaces any running schedule and
/// `stop` drops it. While stopped, `tick` never completes.
#[async_trait]
pub trait PollTimer: Send {
    fn start(&mut self, period: Duration);

    fn stop(&mut self);

    fn is_active(&self) -> bool;

    /// Wait for the next scheduled tick. Must be cancel-safe.
    async fn tick(&mut self);
}
