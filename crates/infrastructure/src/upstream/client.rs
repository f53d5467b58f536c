use async_trait::async_trait;
use holocron_application::ports::{CacheStore, FetchClient};
use holocron_domain::DomainError;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

pub struct UpstreamClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    /// TTL applied when callers pass none. `None` caches forever.
    pub default_ttl: Option<Duration>,
}

/// Caching HTTP wrapper around the upstream REST API.
///
/// Cache-first: a supplied cache key short-circuits the network entirely
/// on a hit. Failures map to the [`DomainError`] taxonomy and propagate
/// immediately. There is no retry; concurrent identical misses each go to
/// the network and the cache converges after the first completion.
pub struct HttpFetchClient {
    client: reqwest::Client,
    base_url: String,
    default_ttl: Option<Duration>,
    cache: Arc<dyn CacheStore>,
}

impl HttpFetchClient {
    pub fn new(config: UpstreamClientConfig, cache: Arc<dyn CacheStore>) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| DomainError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            default_ttl: config.default_ttl,
            cache,
        })
    }

    /// Cross-reference targets arrive as absolute URLs and pass through
    /// unchanged; everything else is joined onto the base URL.
    fn resolve_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            format!("{}{}", self.base_url, path)
        }
    }
}

#[async_trait]
impl FetchClient for HttpFetchClient {
    async fn get_json(
        &self,
        path: &str,
        cache_key: Option<&str>,
        ttl: Option<Duration>,
    ) -> Result<Value, DomainError> {
        if let Some(key) = cache_key {
            if let Some(cached) = self.cache.get(key) {
                debug!(key, "Cache hit");
                return Ok(cached);
            }
        }

        let url = self.resolve_url(path);
        debug!(%url, "Upstream request");

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| map_transport_error(&url, e))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .ok()
                .filter(|body| !body.is_empty())
                .unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("upstream request failed")
                        .to_string()
                });
            warn!(%url, status = status.as_u16(), "Upstream returned error status");
            return Err(DomainError::from_upstream_status(status.as_u16(), message));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| DomainError::Internal(format!("undecodable upstream body: {e}")))?;

        if let Some(key) = cache_key {
            let ttl = ttl.or(self.default_ttl);
            self.cache.set(key, body.clone(), ttl);
            debug!(key, ttl_secs = ttl.map(|t| t.as_secs()), "Response cached");
        }

        Ok(body)
    }
}

fn map_transport_error(url: &str, error: reqwest::Error) -> DomainError {
    if error.is_timeout() {
        DomainError::Timeout(format!("request to {url} timed out"))
    } else if error.is_connect() {
        DomainError::Unreachable(format!("failed to connect to {url}: {error}"))
    } else {
        DomainError::Internal(format!("request to {url} failed: {error}"))
    }
}
