mod cache_stats_port;
mod value_fetcher;

pub use cache_stats_port::{CacheMetricsSnapshot, CacheStatsPort};
pub use value_fetcher::{Fetched, ValueFetcher};

// Re-export for convenience
pub use memocache_domain::DomainError;
