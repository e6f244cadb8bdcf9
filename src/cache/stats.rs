//! Cache Statistics Module
//!
//! Counters describing how the cache has been used since construction.

use std::fmt;

use serde::Serialize;

// == Cache Stats ==
/// Snapshot of cache usage counters.
///
/// Every `get` lands in exactly one of `hits` or `misses`; a stale read is
/// a miss that is also counted in `expirations`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Reads that returned a fresh value
    pub hits: u64,
    /// Reads that returned nothing, absent or stale
    pub misses: u64,
    /// Reads that found and dropped a stale entry
    pub expirations: u64,
    /// Entries dropped to make room for a new key
    pub evictions: u64,
    /// Entries held at snapshot time, stale ones included
    pub total_entries: usize,
}

impl CacheStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of reads.
    pub fn lookups(&self) -> u64 {
        self.hits + self.misses
    }

    // == Hit Rate ==
    /// Fraction of reads that hit, 0.0 before the first read.
    pub fn hit_rate(&self) -> f64 {
        match self.lookups() {
            0 => 0.0,
            total => self.hits as f64 / total as f64,
        }
    }

    pub(crate) fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub(crate) fn record_miss(&mut self) {
        self.misses += 1;
    }

    /// A stale read is a miss that also removed the entry.
    pub(crate) fn record_expiration(&mut self) {
        self.misses += 1;
        self.expirations += 1;
    }

    pub(crate) fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    pub(crate) fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }
}

impl fmt::Display for CacheStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hits={} misses={} expirations={} evictions={} entries={} hit_rate={:.2}",
            self.hits,
            self.misses,
            self.expirations,
            self.evictions,
            self.total_entries,
            self.hit_rate()
        )
    }
}
