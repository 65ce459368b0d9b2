use super::comparer::KeyComparer;
use super::eviction::EvictionPolicy;
use super::storage::BoundedCache;
use memocache_application::ports::{CacheMetricsSnapshot, CacheStatsPort};
use std::sync::atomic::Ordering;
use std::sync::Arc;

/// Object-safe view of a string-keyed cache, used by the fetch layer.
pub trait ValueCacheAccess: Send + Sync {
    fn get(&self, key: &str) -> Option<Arc<str>>;

    /// Admits `value` unless another caller already published one for `key`;
    /// returns whichever value is cached afterwards.
    fn publish(&self, key: &str, value: Arc<str>) -> Arc<str>;
}

impl<C, P> ValueCacheAccess for BoundedCache<String, Arc<str>, C, P>
where
    C: KeyComparer<String> + KeyComparer<str>,
    P: EvictionPolicy<String>,
{
    fn get(&self, key: &str) -> Option<Arc<str>> {
        self.try_get(key)
    }

    fn publish(&self, key: &str, value: Arc<str>) -> Arc<str> {
        self.insert_if_absent(key.to_string(), value)
    }
}

impl<K, V, C, P> CacheStatsPort for BoundedCache<K, V, C, P>
where
    K: Clone + Send,
    V: Clone + Send,
    C: KeyComparer<K>,
    P: EvictionPolicy<K>,
{
    fn cache_metrics_snapshot(&self) -> CacheMetricsSnapshot {
        let metrics = self.metrics();
        CacheMetricsSnapshot {
            capacity: self.capacity(),
            count: self.count(),
            hits: metrics.hits.load(Ordering::Relaxed),
            misses: metrics.misses.load(Ordering::Relaxed),
            insertions: metrics.insertions.load(Ordering::Relaxed),
            overwrites: metrics.overwrites.load(Ordering::Relaxed),
            evictions: metrics.evictions.load(Ordering::Relaxed),
            removals: metrics.removals.load(Ordering::Relaxed),
            policy_desyncs: metrics.policy_desyncs.load(Ordering::Relaxed),
            discarded_values: metrics.discarded_values.load(Ordering::Relaxed),
            hit_rate: metrics.hit_rate(),
        }
    }
}
