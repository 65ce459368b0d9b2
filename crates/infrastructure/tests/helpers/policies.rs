use memocache_infrastructure::{DefaultComparer, EvictionPolicy, LruPolicy};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// LRU policy that can be told to pretend it tracks nothing, which makes it
/// fall out of sync with the store on purpose.
pub struct ForgetfulPolicy {
    inner: LruPolicy<u32>,
    forgetting: Arc<AtomicBool>,
}

impl ForgetfulPolicy {
    pub fn new() -> (Self, Arc<AtomicBool>) {
        let forgetting = Arc::new(AtomicBool::new(false));
        let policy = Self {
            inner: LruPolicy::new(Arc::new(DefaultComparer)),
            forgetting: Arc::clone(&forgetting),
        };
        (policy, forgetting)
    }

    fn forgetting(&self) -> bool {
        self.forgetting.load(Ordering::SeqCst)
    }
}

impl EvictionPolicy<u32> for ForgetfulPolicy {
    fn record_add(&mut self, key: &u32) {
        if !self.forgetting() {
            self.inner.record_add(key);
        }
    }

    fn record_access(&mut self, key: &u32) {
        self.inner.record_access(key);
    }

    fn record_removal(&mut self, key: &u32) {
        self.inner.record_removal(key);
    }

    fn try_evict(&mut self) -> Option<u32> {
        if self.forgetting() {
            return None;
        }
        self.inner.try_evict()
    }

    fn len(&self) -> usize {
        self.inner.len()
    }

    fn tracked_keys(&self) -> Vec<u32> {
        self.inner.tracked_keys()
    }

    fn name(&self) -> &'static str {
        "forgetful"
    }
}

/// LRU policy that nominates `stale` as its first eviction victim, a key the
/// store never held, then behaves normally.
pub struct StaleVictimPolicy {
    inner: LruPolicy<u32>,
    stale: Option<u32>,
}

impl StaleVictimPolicy {
    pub fn new(stale: u32) -> Self {
        Self {
            inner: LruPolicy::new(Arc::new(DefaultComparer)),
            stale: Some(stale),
        }
    }
}

impl EvictionPolicy<u32> for StaleVictimPolicy {
    fn record_add(&mut self, key: &u32) {
        self.inner.record_add(key);
    }

    fn record_access(&mut self, key: &u32) {
        self.inner.record_access(key);
    }

    fn record_removal(&mut self, key: &u32) {
        self.inner.record_removal(key);
    }

    fn try_evict(&mut self) -> Option<u32> {
        self.stale.take().or_else(|| self.inner.try_evict())
    }

    fn len(&self) -> usize {
        self.inner.len()
    }

    fn tracked_keys(&self) -> Vec<u32> {
        self.inner.tracked_keys()
    }

    fn name(&self) -> &'static str {
        "stale-victim"
    }
}
