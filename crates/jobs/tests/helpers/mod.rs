use holocron_application::ports::{CacheStatsSnapshot, CacheStore};
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Cache stub that only counts sweep invocations.
#[derive(Default)]
pub struct MockCacheStore {
    pub purge_calls: AtomicUsize,
}

impl MockCacheStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn purge_count(&self) -> usize {
        self.purge_calls.load(Ordering::SeqCst)
    }
}

impl CacheStore for MockCacheStore {
    fn get(&self, _key: &str) -> Option<Value> {
        None
    }

    fn set(&self, _key: &str, _value: Value, _ttl: Option<Duration>) -> bool {
        true
    }

    fn has(&self, _key: &str) -> bool {
        false
    }

    fn delete(&self, _key: &str) -> bool {
        false
    }

    fn clear_by_pattern(&self, _pattern: Option<&str>) -> usize {
        0
    }

    fn stats(&self) -> CacheStatsSnapshot {
        CacheStatsSnapshot::default()
    }

    fn purge_expired(&self) -> usize {
        self.purge_calls.fetch_add(1, Ordering::SeqCst);
        0
    }

    fn len(&self) -> usize {
        0
    }
}
