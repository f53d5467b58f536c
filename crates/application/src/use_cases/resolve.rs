//! Shared fan-out/fan-in resolution of cross-reference URLs.
//!
//! One cached sub-fetch per reference URL, all in parallel; the URL itself
//! is the cache key, so resolving the same resource under different
//! parents hits the cache instead of the network. Any sub-fetch failure
//! fails the whole resolution; there are no partial results.
//!
//! Fetches run as detached tasks: a caller that is cancelled mid-resolution
//! (client disconnect) does not stop in-flight sub-fetches, so they still
//! complete and populate the cache.

use crate::ports::FetchClient;
use crate::swapi::{decode, DetailResponse, ResourceEnvelope};
use futures::future::try_join_all;
use holocron_domain::DomainError;
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Run one cached fetch on its own task so the work survives the caller.
pub(crate) fn spawn_fetch(
    client: &Arc<dyn FetchClient>,
    path: String,
    cache_key: String,
) -> tokio::task::JoinHandle<Result<serde_json::Value, DomainError>> {
    let client = Arc::clone(client);
    tokio::spawn(async move { client.get_json(&path, Some(&cache_key), None).await })
}

pub(crate) fn join_error(e: tokio::task::JoinError) -> DomainError {
    DomainError::Internal(format!("fetch task failed: {e}"))
}

/// Resolve `urls` in parallel and project each resource to a summary.
/// Output order matches the input reference list regardless of completion
/// order.
pub(crate) async fn resolve_references<P, S, F>(
    client: &Arc<dyn FetchClient>,
    urls: &[String],
    project: F,
) -> Result<Vec<S>, DomainError>
where
    P: DeserializeOwned,
    F: Fn(ResourceEnvelope<P>) -> Result<S, DomainError>,
{
    let handles: Vec<_> = urls
        .iter()
        .map(|url| spawn_fetch(client, url.clone(), url.clone()))
        .collect();
    let bodies = try_join_all(handles).await.map_err(join_error)?;

    bodies
        .into_iter()
        .map(|body| {
            let detail: DetailResponse<P> = decode(body?)?;
            let envelope = detail.result.ok_or_else(|| {
                DomainError::Internal("cross-reference response missing result".to_string())
            })?;
            project(envelope)
        })
        .collect()
}
