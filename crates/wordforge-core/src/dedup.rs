//! Bounded deduplication cache
//!
//! Suppresses candidates already emitted within the retention window.
//! Entries are 64-bit truncations of the candidate's blake3 hash, not the
//! candidate text itself, so memory per entry is fixed. A hash collision can
//! cause an extremely rare false suppression; the cache optimizes output
//! quality, it does not promise cryptographic uniqueness.
//!
//! Eviction is least-recently-used. Once full, inserting a new distinct key
//! forgets the least-recently-touched one, so a candidate that reappears
//! after its hash was evicted is treated as new and re-emitted. That bounded
//! duplicate leakage is the price of O(capacity) memory under arbitrarily
//! long runs.

use std::collections::HashMap;

const NIL: u32 = u32::MAX;

/// One slot in the recency list. Slots are reused in place on eviction, so
/// the backing vec never grows past capacity.
struct Node {
    key: u64,
    prev: u32,
    next: u32,
}

/// Fixed-capacity LRU membership cache over candidate content hashes.
pub struct DedupCache {
    map: HashMap<u64, u32>,
    nodes: Vec<Node>,
    head: u32,
    tail: u32,
    capacity: usize,
}

impl DedupCache {
    /// Create an empty cache. Capacity is clamped to at least one entry and
    /// never changes afterwards.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            map: HashMap::new(),
            nodes: Vec::new(),
            head: NIL,
            tail: NIL,
            capacity,
        }
    }

    /// Number of distinct keys currently retained. Never exceeds capacity.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns `true` if the candidate is new (accepted) and records it;
    /// `false` if it is still within the retention window (suppressed).
    pub fn test_and_insert(&mut self, candidate: &str) -> bool {
        let key = content_key(candidate);

        if let Some(&idx) = self.map.get(&key) {
            self.touch(idx);
            return false;
        }

        if self.map.len() < self.capacity {
            let idx = self.nodes.len() as u32;
            self.nodes.push(Node { key, prev: NIL, next: NIL });
            self.push_front(idx);
            self.map.insert(key, idx);
        } else {
            // Reuse the LRU slot for the new key.
            let idx = self.tail;
            self.unlink(idx);
            let old_key = self.nodes[idx as usize].key;
            self.map.remove(&old_key);
            self.nodes[idx as usize].key = key;
            self.push_front(idx);
            self.map.insert(key, idx);
        }
        true
    }

    fn touch(&mut self, idx: u32) {
        if self.head == idx {
            return;
        }
        self.unlink(idx);
        self.push_front(idx);
    }

    fn unlink(&mut self, idx: u32) {
        let (prev, next) = {
            let node = &self.nodes[idx as usize];
            (node.prev, node.next)
        };
        if prev != NIL {
            self.nodes[prev as usize].next = next;
        } else {
            self.head = next;
        }
        if next != NIL {
            self.nodes[next as usize].prev = prev;
        } else {
            self.tail = prev;
        }
    }

    fn push_front(&mut self, idx: u32) {
        let old_head = self.head;
        {
            let node = &mut self.nodes[idx as usize];
            node.prev = NIL;
            node.next = old_head;
        }
        if old_head != NIL {
            self.nodes[old_head as usize].prev = idx;
        }
        self.head = idx;
        if self.tail == NIL {
            self.tail = idx;
        }
    }
}

/// 64-bit content key: first eight bytes of the blake3 hash.
fn content_key(text: &str) -> u64 {
    let hash = blake3::hash(text.as_bytes());
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&hash.as_bytes()[..8]);
    u64::from_le_bytes(bytes)
}
