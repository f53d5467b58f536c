use holocron_application::ports::CacheStatsSnapshot;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthData {
    pub timestamp: String,
    /// Seconds since process start.
    pub uptime: u64,
    pub cache_stats: CacheStatsSnapshot,
}
