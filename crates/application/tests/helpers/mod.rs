mod mock_fetch;

pub use mock_fetch::MockFetchClient;
