/// Index-linked recency order.
///
/// Nodes live in a flat `Vec` and reference their neighbours by slot index,
/// so the list has no owning pointers and no cycles. Slots freed by removal
/// go on a free list and are reused by the next insertion.
///
/// `lru` is the least recently touched end (next eviction victim), `mru` the
/// most recently touched end.
#[derive(Debug)]
pub struct RecencyList<K> {
    nodes: Vec<Option<Node<K>>>,
    free: Vec<usize>,
    lru: Option<usize>,
    mru: Option<usize>,
    len: usize,
}

#[derive(Debug)]
struct Node<K> {
    key: K,
    older: Option<usize>,
    newer: Option<usize>,
}

impl<K> RecencyList<K> {
    #[cfg(test)]
    fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            free: Vec::new(),
            lru: None,
            mru: None,
            len: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Slot of the least recently touched key.
    #[inline]
    pub fn lru_index(&self) -> Option<usize> {
        self.lru
    }

    #[cfg(test)]
    fn mru_index(&self) -> Option<usize> {
        self.mru
    }

    #[inline]
    pub fn key(&self, idx: usize) -> Option<&K> {
        self.node(idx).map(|node| &node.key)
    }

    /// Appends `key` at the most recently used end and returns its slot.
    pub fn push_mru(&mut self, key: K) -> usize {
        let node = Node {
            key,
            older: None,
            newer: None,
        };

        let idx = match self.free.pop() {
            Some(idx) => {
                self.nodes[idx] = Some(node);
                idx
            }
            None => {
                self.nodes.push(Some(node));
                self.nodes.len() - 1
            }
        };

        self.link_mru(idx);
        self.len += 1;
        idx
    }

    /// Moves the node at `idx` to the most recently used end.
    pub fn move_to_mru(&mut self, idx: usize) {
        if self.mru == Some(idx) || self.node(idx).is_none() {
            return;
        }
        self.unlink(idx);
        self.link_mru(idx);
    }

    /// Unlinks the node at `idx`, frees its slot and returns its key.
    pub fn remove(&mut self, idx: usize) -> Option<K> {
        self.node(idx)?;
        self.unlink(idx);

        let node = self.nodes.get_mut(idx)?.take()?;
        self.free.push(idx);
        self.len -= 1;
        Some(node.key)
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free.clear();
        self.lru = None;
        self.mru = None;
        self.len = 0;
    }

    /// Iterates keys from least to most recently used.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter {
            list: self,
            cursor: self.lru,
        }
    }

    #[inline]
    fn node(&self, idx: usize) -> Option<&Node<K>> {
        self.nodes.get(idx).and_then(Option::as_ref)
    }

    #[inline]
    fn node_mut(&mut self, idx: usize) -> Option<&mut Node<K>> {
        self.nodes.get_mut(idx).and_then(Option::as_mut)
    }

    fn unlink(&mut self, idx: usize) {
        let (older, newer) = match self.node(idx) {
            Some(node) => (node.older, node.newer),
            None => return,
        };

        match older {
            Some(o) => {
                if let Some(node) = self.node_mut(o) {
                    node.newer = newer;
                }
            }
            None => self.lru = newer,
        }

        match newer {
            Some(n) => {
                if let Some(node) = self.node_mut(n) {
                    node.older = older;
                }
            }
            None => self.mru = older,
        }
    }

    fn link_mru(&mut self, idx: usize) {
        let previous_mru = self.mru;
        match self.node_mut(idx) {
            Some(node) => {
                node.older = previous_mru;
                node.newer = None;
            }
            None => return,
        }

        match previous_mru {
            Some(m) => {
                if let Some(node) = self.node_mut(m) {
                    node.newer = Some(idx);
                }
            }
            None => self.lru = Some(idx),
        }
        self.mru = Some(idx);
    }
}

pub struct Iter<'a, K> {
    list: &'a RecencyList<K>,
    cursor: Option<usize>,
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.list.node(self.cursor?)?;
        self.cursor = node.newer;
        Some(&node.key)
    }
}
