//! Shared Cache Module
//!
//! Thread-safe wrapper that serializes every cache operation behind one lock.

use std::hash::Hash;
use std::time::Duration;

use parking_lot::Mutex;

use crate::cache::{CacheStats, CacheStore, Clock, SystemClock};
use crate::config::CacheConfig;

// == Shared Cache ==
/// A [`CacheStore`] guarded by a single mutex.
///
/// Each call takes the lock once and holds it for the whole operation, so
/// the presence check, freshness check and removal or promotion inside a
/// `get` can never interleave with another caller. The lock is never held
/// across I/O or re-entered.
#[derive(Debug)]
pub struct SharedCache<K: Hash + Eq, V, C = SystemClock> {
    inner: Mutex<CacheStore<K, V, C>>,
}

impl<K: Hash + Eq, V: Clone> SharedCache<K, V, SystemClock> {
    /// Creates a shared cache driven by the system clock.
    pub fn new(config: CacheConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<K: Hash + Eq, V: Clone, C: Clock> SharedCache<K, V, C> {
    /// Creates a shared cache reading time from `clock`.
    pub fn with_clock(config: CacheConfig, clock: C) -> Self {
        Self {
            inner: Mutex::new(CacheStore::with_clock(config, clock)),
        }
    }

    /// See [`CacheStore::get`].
    pub fn get(&self, key: &K) -> Option<V> {
        self.inner.lock().get(key)
    }

    /// See [`CacheStore::put`].
    pub fn put(&self, key: K, value: V) {
        self.inner.lock().put(key, value)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.inner.lock().contains(key)
    }

    /// Snapshot of held keys from least to most recently used.
    pub fn keys(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.inner.lock().keys().cloned().collect()
    }

    pub fn stats(&self) -> CacheStats {
        self.inner.lock().stats()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn max_size(&self) -> usize {
        self.inner.lock().max_size()
    }

    pub fn ttl(&self) -> Duration {
        self.inner.lock().ttl()
    }
}
