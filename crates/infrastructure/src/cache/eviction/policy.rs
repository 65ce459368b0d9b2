/// Eviction policy consumed by [`BoundedCache`](crate::cache::BoundedCache).
///
/// A policy only keeps bookkeeping over keys; it never holds values and never
/// touches the store. The cache calls it under its own lock on every
/// admission, access and removal, so implementations need no internal
/// synchronization.
///
/// After every cache operation the set of tracked keys equals the set of keys
/// in the store.
pub trait EvictionPolicy<K>: Send {
    /// Starts tracking `key` as the most useful key. A key already tracked is
    /// repositioned instead of duplicated.
    fn record_add(&mut self, key: &K);

    /// Repositions `key` as the most useful key. Untracked keys are ignored.
    fn record_access(&mut self, key: &K);

    /// Stops tracking `key`. Untracked keys are ignored.
    fn record_removal(&mut self, key: &K);

    /// Stops tracking the least useful key and returns it, or `None` when
    /// nothing is tracked.
    fn try_evict(&mut self) -> Option<K>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Tracked keys ordered from least useful (next victim) to most useful.
    fn tracked_keys(&self) -> Vec<K>;

    fn clear(&mut self) {
        while self.try_evict().is_some() {}
    }

    fn name(&self) -> &'static str {
        "custom"
    }
}

impl<K, P: EvictionPolicy<K> + ?Sized> EvictionPolicy<K> for Box<P> {
    #[inline]
    fn record_add(&mut self, key: &K) {
        (**self).record_add(key)
    }

    #[inline]
    fn record_access(&mut self, key: &K) {
        (**self).record_access(key)
    }

    #[inline]
    fn record_removal(&mut self, key: &K) {
        (**self).record_removal(key)
    }

    #[inline]
    fn try_evict(&mut self) -> Option<K> {
        (**self).try_evict()
    }

    fn len(&self) -> usize {
        (**self).len()
    }

    fn tracked_keys(&self) -> Vec<K> {
        (**self).tracked_keys()
    }

    fn clear(&mut self) {
        (**self).clear()
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
