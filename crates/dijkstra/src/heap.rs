use std::cmp::Ordering;
use std::collections::HashMap;

use crate::Distance;
use crate::error::Error;
use crate::error::Result;
use crate::graph::Vertex;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeapEntry<K> {
    pub vertex: Vertex,
    pub key: K,
}

/// Binary min-heap over `(vertex, key)` pairs with decrease-key by vertex.
///
/// `positions` maps every vertex in the heap to its slot in `entries`. Both are only ever
/// changed together (see `swap` and `extract_min`), so after each public operation:
/// - `entries[positions[v]].vertex == v` for every stored vertex,
/// - `entries[parent(i)].key <= entries[i].key` for every non-root slot `i`.
///
/// All of `insert`, `decrease_key` and `extract_min` are O(log n).
#[derive(Clone, Debug)]
pub struct IndexedMinHeap<K = Distance> {
    entries: Vec<HeapEntry<K>>,
    positions: HashMap<Vertex, usize>,
}

impl<K: PartialOrd + Copy> Default for IndexedMinHeap<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: PartialOrd + Copy> IndexedMinHeap<K> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            positions: HashMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            positions: HashMap::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn contains(&self, vertex: Vertex) -> bool {
        self.positions.contains_key(&vertex)
    }

    pub fn key_of(&self, vertex: Vertex) -> Option<K> {
        self.positions.get(&vertex).map(|&slot| self.entries[slot].key)
    }

    #[inline]
    pub fn peek(&self) -> Option<HeapEntry<K>> {
        self.entries.first().copied()
    }

    /// Adds `vertex` with `key`. A key that is unordered with itself (NaN) is rejected.
    pub fn insert(&mut self, vertex: Vertex, key: K) -> Result<()> {
        if self.positions.contains_key(&vertex) {
            return Err(Error::DuplicateVertex(vertex));
        }
        if key.partial_cmp(&key) != Some(Ordering::Equal) {
            return Err(Error::UnorderedKey { vertex });
        }

        let slot = self.entries.len();
        self.entries.push(HeapEntry { vertex, key });
        self.positions.insert(vertex, slot);
        self.bubble_up(slot);
        Ok(())
    }

    /// Lowers the key of `vertex` to `new_key` in place.
    ///
    /// `new_key` must be strictly smaller than the current key; anything else (including an
    /// unordered key such as NaN) is rejected and the heap is left untouched.
    pub fn decrease_key(&mut self, vertex: Vertex, new_key: K) -> Result<()> {
        let slot = *self
            .positions
            .get(&vertex)
            .ok_or(Error::UnknownVertex(vertex))?;

        let entry = &mut self.entries[slot];
        if new_key.partial_cmp(&entry.key) != Some(Ordering::Less) {
            return Err(Error::KeyIncreaseRejected { vertex });
        }
        entry.key = new_key;

        self.bubble_up(slot);
        Ok(())
    }

    /// Removes and returns the entry with the smallest key.
    pub fn extract_min(&mut self) -> Result<HeapEntry<K>> {
        let Some(last) = self.entries.pop() else {
            return Err(Error::EmptyHeap);
        };

        let min = if self.entries.is_empty() {
            last
        } else {
            let root = std::mem::replace(&mut self.entries[0], last);
            self.positions.insert(last.vertex, 0);
            self.bubble_down(0);
            root
        };

        self.positions.remove(&min.vertex);
        Ok(min)
    }

    fn bubble_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if !(self.entries[slot].key < self.entries[parent].key) {
                break;
            }
            self.swap(slot, parent);
            slot = parent;
        }
    }

    fn bubble_down(&mut self, mut slot: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * slot + 1;
            if left >= len {
                break;
            }
            let right = left + 1;

            // On equal children the left one wins.
            let mut smallest = slot;
            if self.entries[left].key < self.entries[smallest].key {
                smallest = left;
            }
            if right < len && self.entries[right].key < self.entries[smallest].key {
                smallest = right;
            }

            if smallest == slot {
                break;
            }
            self.swap(slot, smallest);
            slot = smallest;
        }
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        self.entries.swap(a, b);
        self.positions.insert(self.entries[a].vertex, a);
        self.positions.insert(self.entries[b].vertex, b);
    }
}
