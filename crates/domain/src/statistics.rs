use serde::{Deserialize, Serialize};

/// One ranked endpoint within a statistics period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestStat {
    pub endpoint: String,
    pub count: u64,
    /// Share of the period's total, formatted to two decimals ("42.86").
    pub percentage: String,
}

/// Immutable per-period snapshot, replaced wholesale on each recomputation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsSnapshot {
    pub total_requests: u64,
    pub unique_endpoints: usize,
    pub top_requests: Vec<RequestStat>,
    pub last_updated: String,
    pub next_recomputation: String,
}
