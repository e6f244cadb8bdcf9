//! Cache Store Module
//!
//! Main cache engine combining LRU ordering with lazy TTL expiration.

use std::hash::Hash;
use std::time::Duration;

use tracing::debug;

use crate::cache::{CacheEntry, CacheStats, Clock, LruMap, SystemClock};
use crate::config::CacheConfig;

// == Cache Store ==
/// Bounded cache with LRU eviction and TTL freshness.
///
/// Every entry lives in a single access-ordered map, so lookup, promotion
/// and eviction never have to reconcile two collections. Stale entries are
/// only dropped when read or when they reach the LRU end under capacity
/// pressure; there is no background sweep.
///
/// `CacheStore` needs `&mut self` for reads as well as writes. Use
/// [`SharedCache`](crate::cache::SharedCache) to share one between threads.
#[derive(Debug)]
pub struct CacheStore<K: Hash + Eq, V, C = SystemClock> {
    /// Entries in access order
    entries: LruMap<K, CacheEntry<V>>,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries allowed
    max_size: usize,
    /// Freshness window applied to every entry
    ttl: Duration,
    /// Time source, read once per operation
    clock: C,
}

impl<K: Hash + Eq, V: Clone> CacheStore<K, V, SystemClock> {
    // == Constructor ==
    /// Creates a store driven by the system clock.
    pub fn new(config: CacheConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<K: Hash + Eq, V: Clone, C: Clock> CacheStore<K, V, C> {
    /// Creates a store reading time from `clock`.
    pub fn with_clock(config: CacheConfig, clock: C) -> Self {
        Self {
            entries: LruMap::with_capacity(config.max_size()),
            stats: CacheStats::new(),
            max_size: config.max_size(),
            ttl: config.ttl(),
            clock,
        }
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// A fresh hit is promoted to most recently used. A stale entry is
    /// removed and reported as a miss, exactly like an absent key.
    pub fn get(&mut self, key: &K) -> Option<V> {
        let now = self.clock.now();

        let fresh = match self.entries.get(key) {
            Some(entry) => entry.is_fresh(now, self.ttl),
            None => {
                self.stats.record_miss();
                return None;
            }
        };

        if !fresh {
            self.entries.remove(key);
            self.stats.record_expiration();
            self.stats.set_total_entries(self.entries.len());
            debug!("Cache entry expired on read");
            return None;
        }

        self.entries.touch(key);
        self.stats.record_hit();
        self.entries.get(key).map(|entry| entry.value.clone())
    }

    // == Put ==
    /// Stores a value, overwriting any previous one for the key.
    ///
    /// The write stamps a new insertion time and marks the key most
    /// recently used. If the key is new and the store is full, the least
    /// recently used entry is evicted first, fresh or not.
    pub fn put(&mut self, key: K, value: V) {
        let now = self.clock.now();

        if !self.entries.contains(&key) && self.entries.len() >= self.max_size {
            if self.entries.evict_oldest().is_some() {
                self.stats.record_eviction();
                debug!("Evicted least recently used cache entry");
            }
        }

        self.entries.insert(key, CacheEntry::new(value, now));
        self.stats.set_total_entries(self.entries.len());
    }

    // == Contains ==
    /// Checks whether `key` is held, stale or not, without touching it.
    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains(key)
    }

    // == Keys ==
    /// Held keys from least to most recently used.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.keys()
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the current number of entries, stale ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Configured capacity
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Configured freshness window
    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}
