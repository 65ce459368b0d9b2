#![allow(dead_code)]

mod policies;

#[allow(unused_imports)]
pub use policies::{ForgetfulPolicy, StaleVictimPolicy};

use memocache_infrastructure::{BoundedCache, EvictionPolicy, KeyComparer};
use std::collections::BTreeSet;
use std::fmt::Debug;

/// Asserts the capacity bound and that policy and store track the same keys.
pub fn assert_consistent<K, V, C, P>(cache: &BoundedCache<K, V, C, P>)
where
    K: Clone + Ord + Debug,
    V: Clone,
    C: KeyComparer<K>,
    P: EvictionPolicy<K>,
{
    let stored: BTreeSet<K> = cache.keys().into_iter().collect();
    let tracked: Vec<K> = cache.recency_order();
    let tracked_set: BTreeSet<K> = tracked.iter().cloned().collect();

    assert!(
        cache.count() <= cache.capacity(),
        "count {} exceeds capacity {}",
        cache.count(),
        cache.capacity()
    );
    assert_eq!(tracked.len(), tracked_set.len(), "policy tracks duplicates");
    assert_eq!(stored, tracked_set, "policy and store disagree");
}
