use async_trait::async_trait;
use holocron_domain::DomainError;
use serde_json::Value;
use std::time::Duration;

/// Port for the caching HTTP fetch client.
#[async_trait]
pub trait FetchClient: Send + Sync {
    /// GET `path` (relative to the configured base URL, or an absolute URL
    /// for cross-reference targets) and return the JSON body.
    ///
    /// When `cache_key` is given the cache is consulted first and a
    /// successful response body is stored under that key. `ttl: None`
    /// falls back to the client's configured default TTL. Failures map to
    /// the [`DomainError`] taxonomy and propagate immediately; there is no
    /// retry and no coalescing of concurrent identical misses.
    async fn get_json(
        &self,
        path: &str,
        cache_key: Option<&str>,
        ttl: Option<Duration>,
    ) -> Result<Value, DomainError>;
}
