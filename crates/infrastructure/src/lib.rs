//! Holocron Infrastructure Layer
pub mod cache;
pub mod upstream;

pub use cache::TtlCache;
pub use upstream::HttpFetchClient;
