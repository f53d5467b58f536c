use chrono::Utc;
use holocron_domain::{RequestStat, StatisticsSnapshot};
use std::sync::RwLock;
use std::time::Duration;
use tracing::{debug, info};

const TOP_REQUESTS: usize = 5;

/// Per-endpoint counters for the current period. Endpoints are kept in
/// first-encounter order so ranking ties resolve stably.
#[derive(Default)]
struct Counters {
    counts: Vec<(String, u64)>,
    total: u64,
}

/// Tracks request counts per logical endpoint and periodically folds them
/// into an immutable top-N snapshot.
///
/// The tracker owns its counters and the latest snapshot exclusively.
/// Recomputation is driven externally (by the statistics job or by tests)
/// so time never has to be real here. Stopping the driving job retains the
/// last snapshot; only [`reset`](Self::reset) clears it.
pub struct StatisticsTracker {
    interval: Duration,
    counters: RwLock<Counters>,
    snapshot: RwLock<Option<StatisticsSnapshot>>,
}

impl StatisticsTracker {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            counters: RwLock::new(Counters::default()),
            snapshot: RwLock::new(None),
        }
    }

    /// Record one request against `endpoint` ("GET /api/people/{id}").
    pub fn track(&self, endpoint: &str) {
        let mut counters = self.counters.write().unwrap_or_else(|e| e.into_inner());
        match counters.counts.iter_mut().find(|(e, _)| e == endpoint) {
            Some((_, count)) => *count += 1,
            None => counters.counts.push((endpoint.to_string(), 1)),
        }
        counters.total += 1;
    }

    /// Latest snapshot, `None` until the first non-empty period completes.
    pub fn snapshot(&self) -> Option<StatisticsSnapshot> {
        self.snapshot
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Fold the current period into a fresh snapshot and reset counters.
    ///
    /// A period with zero requests resets nothing visible: the previous
    /// snapshot stays in place.
    pub fn recompute(&self) {
        let drained = {
            let mut counters = self.counters.write().unwrap_or_else(|e| e.into_inner());
            std::mem::take(&mut *counters)
        };

        if drained.total == 0 {
            debug!("Statistics period had no requests, keeping previous snapshot");
            return;
        }

        let top_requests = Self::top_requests(&drained);
        let now = Utc::now();
        let next = now + chrono::Duration::from_std(self.interval).unwrap_or_default();

        let snapshot = StatisticsSnapshot {
            total_requests: drained.total,
            unique_endpoints: drained.counts.len(),
            top_requests,
            last_updated: now.to_rfc3339(),
            next_recomputation: next.to_rfc3339(),
        };

        info!(
            total_requests = snapshot.total_requests,
            unique_endpoints = snapshot.unique_endpoints,
            "Request statistics recomputed"
        );

        *self.snapshot.write().unwrap_or_else(|e| e.into_inner()) = Some(snapshot);
    }

    /// Clear counters and the exposed snapshot.
    pub fn reset(&self) {
        *self.counters.write().unwrap_or_else(|e| e.into_inner()) = Counters::default();
        *self.snapshot.write().unwrap_or_else(|e| e.into_inner()) = None;
    }

    fn top_requests(counters: &Counters) -> Vec<RequestStat> {
        let mut ranked: Vec<&(String, u64)> = counters.counts.iter().collect();
        // Stable sort: ties keep first-encounter order.
        ranked.sort_by(|a, b| b.1.cmp(&a.1));

        ranked
            .into_iter()
            .take(TOP_REQUESTS)
            .map(|(endpoint, count)| RequestStat {
                endpoint: endpoint.clone(),
                count: *count,
                percentage: format_percentage(*count, counters.total),
            })
            .collect()
    }
}

fn format_percentage(count: u64, total: u64) -> String {
    if total == 0 {
        return "0.00".to_string();
    }
    format!("{:.2}", (count as f64 / total as f64) * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_formats_two_decimals() {
        assert_eq!(format_percentage(1, 3), "33.33");
        assert_eq!(format_percentage(7, 7), "100.00");
        assert_eq!(format_percentage(0, 0), "0.00");
    }
}
