use serde::Serialize;

/// Snapshot of bounded cache metrics for reporting.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CacheMetricsSnapshot {
    pub capacity: usize,
    pub count: usize,
    pub hits: u64,
    pub misses: u64,
    pub insertions: u64,
    pub overwrites: u64,
    pub evictions: u64,
    pub removals: u64,
    pub policy_desyncs: u64,
    pub discarded_values: u64,
    pub hit_rate: f64,
}

impl CacheMetricsSnapshot {
    /// Share of capacity in use, in percent.
    pub fn utilization(&self) -> f64 {
        if self.capacity == 0 {
            return 0.0;
        }
        (self.count as f64 / self.capacity as f64) * 100.0
    }
}

/// Port for cache statistics exposed to the reporting layer.
pub trait CacheStatsPort: Send + Sync {
    fn cache_metrics_snapshot(&self) -> CacheMetricsSnapshot;
}
