use async_trait::async_trait;
use memocache_application::ports::{Fetched, ValueFetcher};
use memocache_domain::DomainError;
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::time::sleep;
use tracing::debug;

/// Stand-in for a remote source: waits a fixed latency, then answers
/// `value-for-<key>`.
pub struct SimulatedFetcher {
    latency: Duration,
    failing_keys: HashSet<String>,
    calls: AtomicUsize,
}

impl SimulatedFetcher {
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            failing_keys: HashSet::new(),
            calls: AtomicUsize::new(0),
        }
    }

    /// Makes fetches of `key` fail with [`DomainError::FetchFailed`].
    pub fn failing_on(mut self, key: impl Into<String>) -> Self {
        self.failing_keys.insert(key.into());
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn value_for(key: &str) -> String {
        format!("value-for-{}", key)
    }
}

#[async_trait]
impl ValueFetcher for SimulatedFetcher {
    async fn fetch(&self, key: &str) -> Result<Fetched, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.latency.is_zero() {
            sleep(self.latency).await;
        }

        if self.failing_keys.contains(key) {
            return Err(DomainError::FetchFailed {
                key: key.to_string(),
                reason: "simulated upstream failure".to_string(),
            });
        }

        debug!(key = %key, latency_ms = self.latency.as_millis() as u64, "Simulated fetch");
        Ok(Fetched::new(Self::value_for(key), false))
    }
}
