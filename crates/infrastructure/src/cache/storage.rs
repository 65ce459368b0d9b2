use super::comparer::{DefaultComparer, KeyComparer};
use super::eviction::{EvictionPolicy, LruPolicy};
use super::metrics::CacheMetrics;
use hashbrown::HashTable;
use memocache_domain::DomainError;
use parking_lot::Mutex;
use std::borrow::Borrow;
use std::hash::Hash;
use std::sync::Arc;
use tracing::{debug, info, warn};

struct Slot<K, V> {
    key: K,
    value: V,
}

/// Store and policy live behind the same lock so every policy call observes
/// exactly the store it describes.
struct CacheState<K, V, P> {
    store: HashTable<Slot<K, V>>,
    policy: P,
}

/// Fixed-capacity, thread-safe key/value cache with a pluggable eviction
/// policy.
///
/// A single `parking_lot::Mutex` serializes every lookup, mutation and policy
/// call. Lookups mutate too (they reposition the key in the policy), so a
/// read/write lock would buy nothing.
///
/// # Get-or-add races
///
/// [`get_or_add`](Self::get_or_add) runs its factory with the lock released so
/// a slow computation never blocks unrelated callers. Two callers racing on
/// the same absent key may therefore both run their factory. The first to
/// re-acquire the lock publishes its value; the other finds the key present
/// on its second check, drops its own value and returns the published one.
/// The contract is at-least-once computation with exactly one surviving value.
pub struct BoundedCache<K, V, C = DefaultComparer, P = LruPolicy<K, C>> {
    capacity: usize,
    comparer: Arc<C>,
    state: Mutex<CacheState<K, V, P>>,
    metrics: Arc<CacheMetrics>,
}

impl<K, V> BoundedCache<K, V>
where
    K: Hash + Eq + Clone + Send,
    V: Clone,
{
    /// LRU cache with natural key equality.
    pub fn new(capacity: usize) -> Result<Self, DomainError> {
        Self::with_comparer(capacity, DefaultComparer)
    }
}

impl<K, V, C> BoundedCache<K, V, C, LruPolicy<K, C>>
where
    K: Clone + Send,
    V: Clone,
    C: KeyComparer<K>,
{
    /// LRU cache whose store and policy share `comparer` for key identity.
    pub fn with_comparer(capacity: usize, comparer: C) -> Result<Self, DomainError> {
        ensure_capacity(capacity)?;
        let comparer = Arc::new(comparer);
        let policy = LruPolicy::with_capacity(Arc::clone(&comparer), capacity);
        Self::with_policy(capacity, policy, comparer)
    }
}

impl<K, V, C, P> BoundedCache<K, V, C, P>
where
    K: Clone,
    V: Clone,
    C: KeyComparer<K>,
    P: EvictionPolicy<K>,
{
    /// Cache driven by a caller-supplied policy.
    ///
    /// `policy` must start empty and must identify keys the same way
    /// `comparer` does; pass it a clone of the same `Arc`.
    pub fn with_policy(capacity: usize, policy: P, comparer: Arc<C>) -> Result<Self, DomainError> {
        ensure_capacity(capacity)?;

        info!(capacity, policy = policy.name(), "Initializing bounded cache");

        Ok(Self {
            capacity,
            comparer,
            state: Mutex::new(CacheState {
                store: HashTable::with_capacity(capacity),
                policy,
            }),
            metrics: Arc::new(CacheMetrics::default()),
        })
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of admitted keys, always within `0..=capacity`.
    pub fn count(&self) -> usize {
        self.state.lock().store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    pub fn metrics(&self) -> Arc<CacheMetrics> {
        Arc::clone(&self.metrics)
    }

    /// Returns a clone of the value for `key` and marks it most recently used.
    /// A miss has no effect on the store or the policy.
    pub fn try_get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: KeyComparer<Q>,
    {
        let hash = KeyComparer::<Q>::hash_key(&*self.comparer, key);
        self.lookup(hash, key)
    }

    /// Checks membership without touching the recency order.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: KeyComparer<Q>,
    {
        let hash = KeyComparer::<Q>::hash_key(&*self.comparer, key);
        let comparer = &*self.comparer;
        self.state
            .lock()
            .store
            .find(hash, |slot| matches(comparer, &slot.key, key))
            .is_some()
    }

    /// Inserts or overwrites `key`.
    ///
    /// Overwriting an existing key refreshes its recency like an access does.
    /// Admitting a new key into a full cache first evicts the policy's victim.
    pub fn set(&self, key: K, value: V) {
        let hash = self.comparer.hash_key(&key);
        let mut state = self.state.lock();
        let CacheState { store, policy } = &mut *state;
        let comparer = &*self.comparer;

        if let Some(slot) = store.find_mut(hash, |slot| comparer.keys_equal(&slot.key, &key)) {
            slot.value = value;
            policy.record_access(&slot.key);
            CacheMetrics::bump(&self.metrics.overwrites);
            return;
        }

        self.admit(store, policy, hash, key, value);
    }

    /// Returns the value for `key`, computing and admitting it with `factory`
    /// on a miss. See the type-level docs for the race semantics.
    pub fn get_or_add<F>(&self, key: K, factory: F) -> V
    where
        F: FnOnce(&K) -> V,
    {
        let hash = self.comparer.hash_key(&key);
        if let Some(existing) = self.lookup(hash, &key) {
            return existing;
        }

        let value = factory(&key);
        self.publish(hash, key, value)
    }

    /// Fallible [`get_or_add`](Self::get_or_add). A factory error admits
    /// nothing and is returned unchanged.
    pub fn get_or_try_add<F, E>(&self, key: K, factory: F) -> Result<V, E>
    where
        F: FnOnce(&K) -> Result<V, E>,
    {
        let hash = self.comparer.hash_key(&key);
        if let Some(existing) = self.lookup(hash, &key) {
            return Ok(existing);
        }

        let value = factory(&key)?;
        Ok(self.publish(hash, key, value))
    }

    /// Admits `value` unless `key` is already present, in which case the
    /// cached value wins and is returned. Counts no hit or miss.
    ///
    /// This is the publication half of [`get_or_add`](Self::get_or_add), for
    /// callers that already ran their own lookup and produced the value
    /// themselves.
    pub fn insert_if_absent(&self, key: K, value: V) -> V {
        let hash = self.comparer.hash_key(&key);
        self.publish(hash, key, value)
    }

    /// Removes `key` and returns its value.
    pub fn remove<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: KeyComparer<Q>,
    {
        let hash = KeyComparer::<Q>::hash_key(&*self.comparer, key);
        let mut state = self.state.lock();
        let CacheState { store, policy } = &mut *state;
        let comparer = &*self.comparer;

        let entry = store
            .find_entry(hash, |slot| matches(comparer, &slot.key, key))
            .ok()?;
        let (slot, _) = entry.remove();
        policy.record_removal(&slot.key);
        CacheMetrics::bump(&self.metrics.removals);
        Some(slot.value)
    }

    pub fn clear(&self) {
        let mut state = self.state.lock();
        state.store.clear();
        state.policy.clear();
        self.metrics.reset_lookups();
        info!("Cache cleared");
    }

    /// Snapshot of the admitted keys, in no particular order.
    pub fn keys(&self) -> Vec<K> {
        self.state
            .lock()
            .store
            .iter()
            .map(|slot| slot.key.clone())
            .collect()
    }

    /// The policy's view of the keys, least useful first.
    pub fn recency_order(&self) -> Vec<K> {
        self.state.lock().policy.tracked_keys()
    }

    fn lookup<Q>(&self, hash: u64, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: KeyComparer<Q>,
    {
        let mut state = self.state.lock();
        let CacheState { store, policy } = &mut *state;
        let comparer = &*self.comparer;

        match store.find(hash, |slot| matches(comparer, &slot.key, key)) {
            Some(slot) => {
                policy.record_access(&slot.key);
                CacheMetrics::bump(&self.metrics.hits);
                Some(slot.value.clone())
            }
            None => {
                CacheMetrics::bump(&self.metrics.misses);
                None
            }
        }
    }

    /// Second half of get-or-add: re-check under the lock, then admit.
    fn publish(&self, hash: u64, key: K, value: V) -> V {
        let mut state = self.state.lock();
        let CacheState { store, policy } = &mut *state;
        let comparer = &*self.comparer;

        if let Some(slot) = store.find(hash, |slot| comparer.keys_equal(&slot.key, &key)) {
            policy.record_access(&slot.key);
            CacheMetrics::bump(&self.metrics.discarded_values);
            debug!("Another caller published first; discarding freshly computed value");
            return slot.value.clone();
        }

        self.admit(store, policy, hash, key, value.clone());
        value
    }

    /// Inserts a key known to be absent. Caller holds the lock.
    fn admit(
        &self,
        store: &mut HashTable<Slot<K, V>>,
        policy: &mut P,
        hash: u64,
        key: K,
        value: V,
    ) {
        while store.len() >= self.capacity {
            if !self.evict_one(store, policy) {
                break;
            }
        }

        policy.record_add(&key);
        let comparer = &*self.comparer;
        store.insert_unique(hash, Slot { key, value }, |slot| {
            comparer.hash_key(&slot.key)
        });
        CacheMetrics::bump(&self.metrics.insertions);
    }

    /// Removes one policy-chosen victim from the store.
    ///
    /// Returns `false` when the policy has nothing to offer, which means it
    /// is out of sync with a full store. That case is counted in
    /// `policy_desyncs` and logged, never raised.
    fn evict_one(&self, store: &mut HashTable<Slot<K, V>>, policy: &mut P) -> bool {
        let Some(victim) = policy.try_evict() else {
            CacheMetrics::bump(&self.metrics.policy_desyncs);
            warn!(
                count = store.len(),
                capacity = self.capacity,
                "Eviction policy is empty while the store is full; admitting without eviction"
            );
            return false;
        };

        let hash = self.comparer.hash_key(&victim);
        let comparer = &*self.comparer;
        match store.find_entry(hash, |slot| comparer.keys_equal(&slot.key, &victim)) {
            Ok(entry) => {
                entry.remove();
                CacheMetrics::bump(&self.metrics.evictions);
                debug!(count = store.len(), "Evicted least useful entry");
            }
            Err(_) => {
                CacheMetrics::bump(&self.metrics.policy_desyncs);
                warn!("Eviction policy nominated a key the store does not hold");
            }
        }
        true
    }
}

/// Compares a stored key against a possibly borrowed lookup key.
#[inline]
fn matches<K, Q, C>(comparer: &C, stored: &K, key: &Q) -> bool
where
    K: Borrow<Q>,
    Q: ?Sized,
    C: KeyComparer<Q> + ?Sized,
{
    KeyComparer::<Q>::keys_equal(comparer, <K as Borrow<Q>>::borrow(stored), key)
}

fn ensure_capacity(capacity: usize) -> Result<(), DomainError> {
    if capacity == 0 {
        return Err(DomainError::InvalidCapacity(capacity));
    }
    Ok(())
}
