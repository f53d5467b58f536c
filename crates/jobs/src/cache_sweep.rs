use holocron_application::ports::CacheStore;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

const DEFAULT_SWEEP_INTERVAL_SECS: u64 = 600;

/// Periodically purges expired cache entries so memory stays bounded even
/// for keys that are never read again.
pub struct CacheSweepJob {
    cache: Arc<dyn CacheStore>,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl CacheSweepJob {
    pub fn new(cache: Arc<dyn CacheStore>) -> Self {
        Self {
            cache,
            interval_secs: DEFAULT_SWEEP_INTERVAL_SECS,
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
        info!(interval_secs = self.interval_secs, "Starting cache sweep job");

        let mut interval = tokio::time::interval(Duration::from_secs(self.interval_secs));

        loop {
            tokio::select! {
                _ = self.shutdown.cancelled() => {
                    info!("CacheSweepJob: shutting down");
                    break;
                }
                _ = interval.tick() => {
                    let purged = self.cache.purge_expired();
                    if purged > 0 {
                        info!(purged, remaining = self.cache.len(), "Cache sweep completed");
                    } else {
                        debug!("Cache sweep found nothing to purge");
                    }
                }
            }
        }
    }
}
