//! Inter-message pacing.

use std::time::Duration;

use async_trait::async_trait;

use crate::domain::ports::PacerPort;

/// Default pause between two deliveries.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(1);

/// Sleeps for a fixed interval on every pause.
#[derive(Debug, Clone, Copy)]
pub struct IntervalPacer {
    interval: Duration,
}

impl Default for IntervalPacer {
    fn default() -> Self {
        Self::new(DEFAULT_INTERVAL)
    }
}

impl IntervalPacer {
    /// Creates a pacer waiting `interval` between deliveries.
    #[must_use]
    pub const fn new(interval: Duration) -> Self {
        Self { interval }
    }
}

#[async_trait]
impl PacerPort for IntervalPacer {
    async fn pause(&self) {
        tokio::time::sleep(self.interval).await;
    }
}

/// Never waits.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopPacer;

#[async_trait]
impl PacerPort for NoopPacer {
    async fn pause(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn test_interval_pacer_waits_full_interval() {
        let pacer = IntervalPacer::default();
        let start = Instant::now();

        pacer.pause().await;
        pacer.pause().await;

        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_secs(2));
        assert!(elapsed < Duration::from_secs(3));
    }

    #[tokio::test(start_paused = true)]
    async fn test_noop_pacer_returns_immediately() {
        let start = Instant::now();
        NoopPacer.pause().await;
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[test]
    fn test_noop_pacer_ready_on_first_poll() {
        let mut pause = tokio_test::task::spawn(NoopPacer.pause());
        tokio_test::assert_ready!(pause.poll());
    }
}
