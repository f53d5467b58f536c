use async_trait::async_trait;
use holocron_application::ports::FetchClient;
use holocron_domain::DomainError;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

/// Scripted fetch client: responses keyed by request path, optional
/// per-path delays to vary completion order, and a call log.
#[derive(Default)]
pub struct MockFetchClient {
    responses: Mutex<HashMap<String, Result<Value, DomainError>>>,
    delays: Mutex<HashMap<String, Duration>>,
    calls: Mutex<Vec<String>>,
    completions: Mutex<Vec<String>>,
}

impl MockFetchClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, path: &str, body: Value) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(path.to_string(), Ok(body));
        self
    }

    pub fn fail(self, path: &str, error: DomainError) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(path.to_string(), Err(error));
        self
    }

    pub fn delay(self, path: &str, delay: Duration) -> Self {
        self.delays
            .lock()
            .unwrap()
            .insert(path.to_string(), delay);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Paths whose fetch ran to completion (after any scripted delay).
    pub fn completions(&self) -> Vec<String> {
        self.completions.lock().unwrap().clone()
    }
}

#[async_trait]
impl FetchClient for MockFetchClient {
    async fn get_json(
        &self,
        path: &str,
        _cache_key: Option<&str>,
        _ttl: Option<Duration>,
    ) -> Result<Value, DomainError> {
        self.calls.lock().unwrap().push(path.to_string());

        let delay = self.delays.lock().unwrap().get(path).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        self.completions.lock().unwrap().push(path.to_string());

        self.responses
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .unwrap_or_else(|| Err(DomainError::NotFound(format!("no stub for {path}"))))
    }
}
