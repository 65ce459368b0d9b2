use async_trait::async_trait;
use memocache_application::ports::{CacheMetricsSnapshot, CacheStatsPort, Fetched, ValueFetcher};
use memocache_domain::DomainError;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use tokio::sync::RwLock;

/// Answers from a canned table; keys seen before are reported as cache hits.
#[derive(Clone)]
pub struct MockValueFetcher {
    responses: Arc<RwLock<HashMap<String, String>>>,
    seen: Arc<Mutex<HashSet<String>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockValueFetcher {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(RwLock::new(HashMap::new())),
            seen: Arc::new(Mutex::new(HashSet::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub async fn set_response(&self, key: &str, value: &str) {
        self.responses
            .write()
            .await
            .insert(key.to_string(), value.to_string());
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ValueFetcher for MockValueFetcher {
    async fn fetch(&self, key: &str) -> Result<Fetched, DomainError> {
        self.calls.lock().unwrap().push(key.to_string());

        let value = self.responses.read().await.get(key).cloned();
        match value {
            Some(value) => {
                let cache_hit = !self.seen.lock().unwrap().insert(key.to_string());
                Ok(Fetched::new(value, cache_hit))
            }
            None => Err(DomainError::FetchFailed {
                key: key.to_string(),
                reason: "no canned response".to_string(),
            }),
        }
    }
}

pub struct MockCacheStatsPort {
    snapshot: Mutex<CacheMetricsSnapshot>,
}

impl MockCacheStatsPort {
    pub fn new(snapshot: CacheMetricsSnapshot) -> Self {
        Self {
            snapshot: Mutex::new(snapshot),
        }
    }

    pub fn set_snapshot(&self, snapshot: CacheMetricsSnapshot) {
        *self.snapshot.lock().unwrap() = snapshot;
    }
}

impl CacheStatsPort for MockCacheStatsPort {
    fn cache_metrics_snapshot(&self) -> CacheMetricsSnapshot {
        self.snapshot.lock().unwrap().clone()
    }
}
