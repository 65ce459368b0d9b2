use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

/// Lifetime counters for one [`BoundedCache`](super::BoundedCache).
///
/// Lookup counters are bumped on every `try_get`, so they get a cache line of
/// their own; admission counters share the next one.
#[derive(Default)]
#[repr(align(64))]
pub struct CacheMetrics {
    pub hits: AtomicU64,
    pub misses: AtomicU64,
    _hot_pad: [u64; 6],

    pub insertions: AtomicU64,
    pub overwrites: AtomicU64,
    pub evictions: AtomicU64,
    pub removals: AtomicU64,
    /// Times the eviction policy and the store disagreed about membership.
    /// Any non-zero value means the policy is desynchronized from the store.
    pub policy_desyncs: AtomicU64,
    /// Values produced by a `get_or_add` factory that lost the publication race.
    pub discarded_values: AtomicU64,
}

impl CacheMetrics {
    pub fn hit_rate(&self) -> f64 {
        let hits = self.hits.load(AtomicOrdering::Relaxed) as f64;
        let total = hits + self.misses.load(AtomicOrdering::Relaxed) as f64;

        if total > 0.0 {
            (hits / total) * 100.0
        } else {
            0.0
        }
    }

    #[inline]
    pub(super) fn bump(counter: &AtomicU64) {
        counter.fetch_add(1, AtomicOrdering::Relaxed);
    }

    pub(super) fn reset_lookups(&self) {
        self.hits.store(0, AtomicOrdering::Relaxed);
        self.misses.store(0, AtomicOrdering::Relaxed);
    }
}
