use crate::ports::ValueFetcher;
use memocache_domain::DomainError;
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FetchOutcome {
    pub key: String,
    pub value: String,
    pub cache_hit: bool,
    pub elapsed_ms: u64,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct FetchReport {
    pub outcomes: Vec<FetchOutcome>,
}

impl FetchReport {
    pub fn hits(&self) -> usize {
        self.outcomes.iter().filter(|o| o.cache_hit).count()
    }

    pub fn misses(&self) -> usize {
        self.outcomes.len() - self.hits()
    }
}

/// Issues keys one after another against a fetcher and records what happened.
pub struct FetchSequenceUseCase {
    fetcher: Arc<dyn ValueFetcher>,
}

impl FetchSequenceUseCase {
    pub fn new(fetcher: Arc<dyn ValueFetcher>) -> Self {
        Self { fetcher }
    }

    /// Stops at the first failing key and returns its error.
    pub async fn execute(&self, keys: &[String]) -> Result<FetchReport, DomainError> {
        let mut report = FetchReport {
            outcomes: Vec::with_capacity(keys.len()),
        };

        for key in keys {
            let start = Instant::now();
            let fetched = self.fetcher.fetch(key).await?;
            let elapsed_ms = start.elapsed().as_millis() as u64;

            debug!(
                key = %key,
                cache_hit = fetched.cache_hit,
                elapsed_ms,
                "Fetched key"
            );

            report.outcomes.push(FetchOutcome {
                key: key.clone(),
                value: fetched.value.to_string(),
                cache_hit: fetched.cache_hit,
                elapsed_ms,
            });
        }

        Ok(report)
    }
}
