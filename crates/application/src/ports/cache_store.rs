use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

/// Point-in-time cache counters for API exposure.
///
/// `hits` and `misses` are monotonic since the last full clear; `keys`
/// counts live (non-expired) entries at snapshot time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CacheStatsSnapshot {
    pub hits: u64,
    pub misses: u64,
    pub keys: usize,
}

/// Port for the TTL key-value store.
///
/// The store owns hit/miss accounting: every `get` counts exactly one hit
/// or miss, including the miss recorded when an expired key is consulted.
/// `has` is a pure existence check with no side effect on the counters.
pub trait CacheStore: Send + Sync {
    fn get(&self, key: &str) -> Option<Value>;

    /// `ttl: None` stores a never-expiring entry.
    fn set(&self, key: &str, value: Value, ttl: Option<Duration>) -> bool;

    fn has(&self, key: &str) -> bool;

    /// Returns true if the key was present.
    fn delete(&self, key: &str) -> bool;

    /// Removes every key containing `pattern` as a substring; with no
    /// pattern, clears the whole store and resets the hit/miss counters.
    /// Returns the number of keys removed.
    fn clear_by_pattern(&self, pattern: Option<&str>) -> usize;

    fn stats(&self) -> CacheStatsSnapshot;

    /// Active expiry entry point for the background sweep. Returns the
    /// number of expired entries purged.
    fn purge_expired(&self) -> usize;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
