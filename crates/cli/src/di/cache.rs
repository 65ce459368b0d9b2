use memocache_application::ports::{CacheStatsPort, ValueFetcher};
use memocache_application::use_cases::{FetchSequenceUseCase, GetCacheStatsUseCase};
use memocache_domain::Config;
use memocache_infrastructure::{
    ActiveComparer, BoundedCache, CachedFetcher, SimulatedFetcher, ValueCacheAccess,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

type StringCache = BoundedCache<String, Arc<str>, ActiveComparer>;

pub struct CacheServices {
    pub fetch_sequence: Arc<FetchSequenceUseCase>,
    pub cache_stats: Arc<GetCacheStatsUseCase>,
}

impl CacheServices {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let comparer = ActiveComparer::from_config(config.cache.case_insensitive_keys);
        info!(
            capacity = config.cache.capacity,
            key_matching = comparer.as_str(),
            latency_ms = config.fetch.latency_ms,
            "Wiring cache services"
        );

        let cache: Arc<StringCache> =
            Arc::new(BoundedCache::with_comparer(config.cache.capacity, comparer)?);

        let source: Arc<dyn ValueFetcher> = Arc::new(SimulatedFetcher::new(
            Duration::from_millis(config.fetch.latency_ms),
        ));
        let cache_access: Arc<dyn ValueCacheAccess> = cache.clone();
        let fetcher: Arc<dyn ValueFetcher> = Arc::new(CachedFetcher::new(source, cache_access));

        let stats_port: Arc<dyn CacheStatsPort> = cache;

        Ok(Self {
            fetch_sequence: Arc::new(FetchSequenceUseCase::new(fetcher)),
            cache_stats: Arc::new(GetCacheStatsUseCase::new(stats_port)),
        })
    }
}
