use super::order::RecencyList;
use super::policy::EvictionPolicy;
use crate::cache::comparer::{DefaultComparer, KeyComparer};
use hashbrown::HashTable;
use std::sync::Arc;
use tracing::trace;

/// Least-recently-used policy.
///
/// Keeps a [`RecencyList`] arena plus a `HashTable` from key hash to arena
/// slot. Key identity comes from the same comparer the cache's store uses,
/// so both sides agree on which keys are equal. Every operation is O(1)
/// expected.
pub struct LruPolicy<K, C = DefaultComparer> {
    comparer: Arc<C>,
    order: RecencyList<K>,
    index: HashTable<usize>,
}

impl<K, C: KeyComparer<K>> LruPolicy<K, C> {
    pub fn new(comparer: Arc<C>) -> Self {
        Self::with_capacity(comparer, 0)
    }

    pub fn with_capacity(comparer: Arc<C>, capacity: usize) -> Self {
        Self {
            comparer,
            order: RecencyList::with_capacity(capacity),
            index: HashTable::with_capacity(capacity),
        }
    }

    fn position(&self, key: &K) -> Option<usize> {
        let hash = self.comparer.hash_key(key);
        let order = &self.order;
        let comparer = &self.comparer;
        self.index
            .find(hash, |&idx| {
                order
                    .key(idx)
                    .is_some_and(|tracked| comparer.keys_equal(tracked, key))
            })
            .copied()
    }
}

impl<K, C> EvictionPolicy<K> for LruPolicy<K, C>
where
    K: Clone + Send,
    C: KeyComparer<K>,
{
    fn record_add(&mut self, key: &K) {
        if let Some(idx) = self.position(key) {
            self.order.move_to_mru(idx);
            return;
        }

        let idx = self.order.push_mru(key.clone());
        let hash = self.comparer.hash_key(key);
        let order = &self.order;
        let comparer = &self.comparer;
        self.index.insert_unique(hash, idx, |&slot| {
            order.key(slot).map_or(0, |tracked| comparer.hash_key(tracked))
        });
    }

    fn record_access(&mut self, key: &K) {
        match self.position(key) {
            Some(idx) => self.order.move_to_mru(idx),
            None => trace!("Access recorded for an untracked key; ignoring"),
        }
    }

    fn record_removal(&mut self, key: &K) {
        let hash = self.comparer.hash_key(key);
        let order = &self.order;
        let comparer = &self.comparer;
        let entry = self.index.find_entry(hash, |&idx| {
            order
                .key(idx)
                .is_some_and(|tracked| comparer.keys_equal(tracked, key))
        });

        if let Ok(entry) = entry {
            let (idx, _) = entry.remove();
            self.order.remove(idx);
        }
    }

    fn try_evict(&mut self) -> Option<K> {
        let idx = self.order.lru_index()?;
        let hash = self.order.key(idx).map(|k| self.comparer.hash_key(k))?;

        if let Ok(entry) = self.index.find_entry(hash, |&slot| slot == idx) {
            entry.remove();
        }
        self.order.remove(idx)
    }

    fn len(&self) -> usize {
        self.order.len()
    }

    fn tracked_keys(&self) -> Vec<K> {
        self.order.iter().cloned().collect()
    }

    fn clear(&mut self) {
        self.order.clear();
        self.index.clear();
    }

    fn name(&self) -> &'static str {
        "lru"
    }
}
