use async_trait::async_trait;
use memocache_domain::DomainError;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fetched {
    pub value: Arc<str>,
    pub cache_hit: bool,
}

impl Fetched {
    pub fn new(value: impl Into<Arc<str>>, cache_hit: bool) -> Self {
        Self {
            value: value.into(),
            cache_hit,
        }
    }
}

/// Source of values for a key, possibly remote and slow.
#[async_trait]
pub trait ValueFetcher: Send + Sync {
    async fn fetch(&self, key: &str) -> Result<Fetched, DomainError>;
}
