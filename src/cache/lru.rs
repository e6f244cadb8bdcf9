//! LRU Map Module
//!
//! Implements least-recently-used ordering for cache eviction.

use std::hash::Hash;

use hashlink::LinkedHashMap;

// == LRU Map ==
/// Hash map that keeps its keys in access order.
///
/// Backed by a `LinkedHashMap` where:
/// - Front = Least recently used
/// - Back = Most recently used
///
/// Lookup, promotion and eviction are all O(1).
#[derive(Debug)]
pub struct LruMap<K: Hash + Eq, V> {
    /// Entries ordered by access time
    order: LinkedHashMap<K, V>,
}

impl<K: Hash + Eq, V> LruMap<K, V> {
    // == Constructor ==
    /// Creates an empty map with room for `capacity` keys.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            order: LinkedHashMap::with_capacity(capacity),
        }
    }

    // == Get ==
    /// Returns the value for `key` without changing its position.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.order.get(key)
    }

    // == Touch ==
    /// Marks a key as recently used (moves to back).
    ///
    /// Returns false if the key is not tracked.
    pub fn touch(&mut self, key: &K) -> bool {
        self.order.to_back(key).is_some()
    }

    // == Insert ==
    /// Inserts or overwrites `key` and marks it most recently used.
    ///
    /// Returns the previous value if the key was already present.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        // LinkedHashMap::insert always relinks the key at the back
        self.order.insert(key, value)
    }

    // == Remove ==
    /// Removes a key, returning its value if it was tracked.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.order.remove(key)
    }

    // == Evict Oldest ==
    /// Removes and returns the least recently used entry.
    ///
    /// Returns None if the map is empty.
    pub fn evict_oldest(&mut self) -> Option<(K, V)> {
        self.order.pop_front()
    }

    // == Length ==
    /// Returns the number of tracked keys.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    // == Contains ==
    /// Checks if a key is being tracked.
    pub fn contains(&self, key: &K) -> bool {
        self.order.contains_key(key)
    }

    // == Keys ==
    /// Iterates keys from least to most recently used.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.order.keys()
    }
}
