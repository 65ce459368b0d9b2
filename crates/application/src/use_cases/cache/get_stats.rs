use crate::ports::{CacheMetricsSnapshot, CacheStatsPort};
use std::sync::Arc;

pub struct GetCacheStatsUseCase {
    port: Arc<dyn CacheStatsPort>,
}

impl GetCacheStatsUseCase {
    pub fn new(port: Arc<dyn CacheStatsPort>) -> Self {
        Self { port }
    }

    pub fn execute(&self) -> CacheMetricsSnapshot {
        self.port.cache_metrics_snapshot()
    }
}
