mod cache_store;
mod fetch_client;

pub use cache_store::{CacheStatsSnapshot, CacheStore};
pub use fetch_client::FetchClient;
