//! Cache Entry Module
//!
//! Defines the structure for individual cache entries stamped with a monotonic
//! insertion time.

use std::time::Duration;

use tokio::time::Instant;

// == Cache Entry ==
/// A single cached value plus the instant it was inserted.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Monotonic insertion time
    pub created_at: Instant,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new entry stamped with the current instant.
    pub fn new(value: V) -> Self {
        Self::with_timestamp(value, Instant::now())
    }

    /// Creates an entry with an explicit insertion instant.
    pub fn with_timestamp(value: V, created_at: Instant) -> Self {
        Self { value, created_at }
    }

    // == Age ==
    /// Time elapsed between insertion and `now`.
    ///
    /// Saturates at zero if `now` precedes the insertion instant.
    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    // == Is Expired ==
    /// Checks whether the entry has reached the given maximum age.
    ///
    /// Boundary condition: an entry whose age equals `interval` exactly is
    /// expired.
    pub fn is_expired(&self, now: Instant, interval: Duration) -> bool {
        self.age(now) >= interval
    }
}
