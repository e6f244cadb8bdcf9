//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with freshness checks.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// A stored value together with the instant it was written.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// When the value was last written by `put`
    pub inserted_at: Instant,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new entry stamped with `now`.
    pub fn new(value: V, now: Instant) -> Self {
        Self {
            value,
            inserted_at: now,
        }
    }

    // == Age ==
    /// Time elapsed since the entry was written.
    ///
    /// Saturates to zero if `now` precedes the insertion instant.
    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.inserted_at)
    }

    // == Is Fresh ==
    /// Checks whether the entry is still valid at `now`.
    ///
    /// Boundary condition: an entry is fresh only while its age is strictly
    /// less than `ttl`. Once `ttl` has fully elapsed it is stale, so a zero
    /// TTL makes every entry stale immediately.
    pub fn is_fresh(&self, now: Instant, ttl: Duration) -> bool {
        self.age(now) < ttl
    }
}
