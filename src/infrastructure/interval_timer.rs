// Tokio interval backed PollTimer
use crate::application::poll_timer::PollTimer;
use async_trait::async_trait;
use std::time::Duration;
use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};

#[derive(Debug, Default)]
pub struct IntervalTimer {
    interval: Option<Interval>,
}

impl IntervalTimer {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PollTimer for IntervalTimer {
    fn start(&mut self, period: Duration) {
        // First tick one full period after start, like a browser interval
        let mut interval = interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        self.interval = Some(interval);
        tracing::debug!("Polling every {:?}", period);
    }

    fn stop(&mut self) {
        if self.interval.take().is_some() {
            tracing::debug!("Polling stopped");
        }
    }

    fn is_active(&self) -> bool {
        self.interval.is_some()
    }

    async fn tick(&mut self) {
        match self.interval.as_mut() {
            Some(interval) => {
                interval.tick().await;
            }
            None => std::future::pending::<()>().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::timeout;

    #[tokio::test(start_paused = true)]
    async fn test_first_tick_after_one_period() {
        let mut timer = IntervalTimer::new();
        timer.start(Duration::from_secs(5));

        assert!(timeout(Duration::from_millis(4_900), timer.tick()).await.is_err());
        assert!(timeout(Duration::from_millis(200), timer.tick()).await.is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn test_stopped_timer_never_ticks() {
        let mut timer = IntervalTimer::new();
        assert!(!timer.is_active());
        assert!(timeout(Duration::from_secs(60), timer.tick()).await.is_err());

        timer.start(Duration::from_secs(5));
        assert!(timer.is_active());
        timer.stop();
        assert!(!timer.is_active());
        assert!(timeout(Duration::from_secs(60), timer.tick()).await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_replaces_schedule() {
        let mut timer = IntervalTimer::new();
        timer.start(Duration::from_secs(5));
        tokio::time::advance(Duration::from_secs(3)).await;

        timer.start(Duration::from_secs(5));
        assert!(timeout(Duration::from_millis(4_900), timer.tick()).await.is_err());
        assert!(timeout(Duration::from_millis(200), timer.tick()).await.is_ok());
    }
}
