use crate::cache::ValueCacheAccess;
use async_trait::async_trait;
use memocache_application::ports::{Fetched, ValueFetcher};
use memocache_domain::DomainError;
use std::sync::Arc;
use tracing::debug;

/// Fetch-through wrapper: answers from the cache when it can, otherwise asks
/// the inner fetcher and publishes the result.
///
/// The inner fetch runs without any cache lock held. Concurrent misses on the
/// same key may each reach the inner fetcher; the first value published wins
/// and every caller gets that value back.
pub struct CachedFetcher {
    inner: Arc<dyn ValueFetcher>,
    cache: Arc<dyn ValueCacheAccess>,
}

impl CachedFetcher {
    pub fn new(inner: Arc<dyn ValueFetcher>, cache: Arc<dyn ValueCacheAccess>) -> Self {
        Self { inner, cache }
    }
}

#[async_trait]
impl ValueFetcher for CachedFetcher {
    async fn fetch(&self, key: &str) -> Result<Fetched, DomainError> {
        if let Some(value) = self.cache.get(key) {
            debug!(key = %key, "Cache HIT");
            return Ok(Fetched::new(value, true));
        }

        let fetched = self.inner.fetch(key).await?;
        let value = self.cache.publish(key, fetched.value);

        debug!(key = %key, "Cache MISS, fetched from source");
        Ok(Fetched::new(value, false))
    }
}
