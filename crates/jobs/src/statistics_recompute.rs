use holocron_application::services::StatisticsTracker;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::info;

const DEFAULT_RECOMPUTE_INTERVAL_SECS: u64 = 300;

/// Drives the statistics tracker's periodic fold: every interval the
/// current period is ranked into a snapshot and the counters reset.
/// Cancellation stops the timer and leaves the last snapshot in place.
pub struct StatisticsRecomputeJob {
    tracker: Arc<StatisticsTracker>,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl StatisticsRecomputeJob {
    pub fn new(tracker: Arc<StatisticsTracker>) -> Self {
        Self {
            tracker,
            interval_secs: DEFAULT_RECOMPUTE_INTERVAL_SECS,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, interval_secs: u64) -> Self {
        self.interval_secs = interval_secs;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self: Arc<Self>) {
        info!(
            interval_secs = self.interval_secs,
            "Starting statistics recomputation job"
        );

        let mut interval = tokio::time::interval(Duration::from_secs(self.interval_secs));

        loop {
            tokio::select! {
                _ = self.shutdown.cancelled() => {
                    info!("StatisticsRecomputeJob: shutting down, last snapshot retained");
                    break;
                }
                _ = interval.tick() => {
                    self.tracker.recompute();
                }
            }
        }
    }
}
