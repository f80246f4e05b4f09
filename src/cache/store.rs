//! Cache Store Module
//!
//! Unsynchronized storage behind [`ExpiringCache`](super::ExpiringCache): the
//! entry map, its statistics, and the age-based sweep.

use std::collections::HashMap;
use std::time::Duration;

use tokio::time::Instant;

use crate::cache::{CacheEntry, CacheStats};

// == Cache Store ==
/// Key-value storage where every entry shares one maximum age.
#[derive(Debug)]
pub struct CacheStore<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum entry age, also the sweep period
    interval: Duration,
}

impl<V: Clone> CacheStore<V> {
    // == Constructor ==
    pub fn new(interval: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            interval,
        }
    }

    // == Add ==
    /// Stores a value under `key`, stamped with the current instant.
    ///
    /// An existing entry for the key is replaced and its age resets to zero.
    pub fn add(&mut self, key: impl Into<String>, value: V) {
        self.entries.insert(key.into(), CacheEntry::new(value));
        self.stats.set_total_entries(self.entries.len());
    }

    // == Get ==
    /// Returns a copy of the value stored under `key`.
    ///
    /// Age is not checked here; an entry stays readable until a sweep removes it.
    pub fn get(&mut self, key: &str) -> Option<V> {
        match self.entries.get(key) {
            Some(entry) => {
                self.stats.record_hit();
                Some(entry.value.clone())
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Cleanup Expired ==
    /// Removes every entry that has reached the maximum age.
    ///
    /// Returns the number of entries removed.
    pub fn cleanup_expired(&mut self) -> usize {
        self.cleanup_expired_at(Instant::now())
    }

    /// Same as [`cleanup_expired`](Self::cleanup_expired), measuring ages against `now`.
    pub fn cleanup_expired_at(&mut self, now: Instant) -> usize {
        let interval = self.interval;
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired(now, interval));

        let removed = before - self.entries.len();
        self.stats.record_sweep(removed);
        self.stats.set_total_entries(self.entries.len());
        removed
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
