use dashmap::DashMap;
use holocron_application::ports::{CacheStatsSnapshot, CacheStore};
use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::time::{Duration, Instant};
use tracing::debug;

struct CacheEntry {
    value: Value,
    /// `None` never expires.
    expires_at: Option<Instant>,
}

impl CacheEntry {
    fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|at| at <= now)
    }
}

/// In-memory TTL key-value store.
///
/// Expiry is lazy on read plus an active sweep via [`purge_expired`]
/// driven by the cache maintenance job. Hit/miss accounting lives here:
/// every `get` records exactly one hit or miss (an expired entry counts
/// as a miss and is dropped on the spot).
pub struct TtlCache {
    entries: DashMap<String, CacheEntry>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl TtlCache {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    fn record_hit(&self) {
        self.hits.fetch_add(1, AtomicOrdering::Relaxed);
    }

    fn record_miss(&self) {
        self.misses.fetch_add(1, AtomicOrdering::Relaxed);
    }
}

impl Default for TtlCache {
    fn default() -> Self {
        Self::new()
    }
}

impl CacheStore for TtlCache {
    fn get(&self, key: &str) -> Option<Value> {
        let now = Instant::now();

        let live = match self.entries.get(key) {
            Some(entry) if !entry.is_expired(now) => Some(entry.value.clone()),
            Some(_) => None, // expired, handled below after the guard drops
            None => {
                self.record_miss();
                return None;
            }
        };

        match live {
            Some(value) => {
                self.record_hit();
                Some(value)
            }
            None => {
                self.entries.remove_if(key, |_, entry| entry.is_expired(now));
                self.record_miss();
                None
            }
        }
    }

    fn set(&self, key: &str, value: Value, ttl: Option<Duration>) -> bool {
        let expires_at = ttl.map(|ttl| Instant::now() + ttl);
        self.entries
            .insert(key.to_string(), CacheEntry { value, expires_at });
        true
    }

    fn has(&self, key: &str) -> bool {
        self.entries
            .get(key)
            .is_some_and(|entry| !entry.is_expired(Instant::now()))
    }

    fn delete(&self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    fn clear_by_pattern(&self, pattern: Option<&str>) -> usize {
        match pattern {
            Some(pattern) => {
                let before = self.entries.len();
                self.entries.retain(|key, _| !key.contains(pattern));
                let removed = before.saturating_sub(self.entries.len());
                debug!(pattern, removed, "Cache cleared by pattern");
                removed
            }
            None => {
                let removed = self.entries.len();
                self.entries.clear();
                self.hits.store(0, AtomicOrdering::Relaxed);
                self.misses.store(0, AtomicOrdering::Relaxed);
                debug!(removed, "Cache fully cleared");
                removed
            }
        }
    }

    fn stats(&self) -> CacheStatsSnapshot {
        let now = Instant::now();
        let keys = self
            .entries
            .iter()
            .filter(|entry| !entry.is_expired(now))
            .count();

        CacheStatsSnapshot {
            hits: self.hits.load(AtomicOrdering::Relaxed),
            misses: self.misses.load(AtomicOrdering::Relaxed),
            keys,
        }
    }

    fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired(now));
        let purged = before.saturating_sub(self.entries.len());
        if purged > 0 {
            debug!(purged, "Expired cache entries purged");
        }
        purged
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
