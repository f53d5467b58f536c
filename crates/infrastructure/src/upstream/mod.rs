mod client;

pub use client::{HttpFetchClient, UpstreamClientConfig};
