use crate::ports::CacheStore;
use std::sync::Arc;
use tracing::info;

pub struct ClearCacheUseCase {
    cache: Arc<dyn CacheStore>,
}

impl ClearCacheUseCase {
    pub fn new(cache: Arc<dyn CacheStore>) -> Self {
        Self { cache }
    }

    /// Clear keys matching `pattern` as a substring, or everything when no
    /// pattern is given. Returns the number of keys removed.
    pub fn execute(&self, pattern: Option<&str>) -> usize {
        let removed = self.cache.clear_by_pattern(pattern);
        match pattern {
            Some(p) => info!(pattern = %p, removed, "Cache cleared by pattern"),
            None => info!(removed, "Cache fully cleared"),
        }
        removed
    }
}
