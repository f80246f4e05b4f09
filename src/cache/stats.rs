//! Cache Statistics Module
//!
//! Tracks lookup outcomes and reaper activity.

use chrono::{DateTime, Utc};
use serde::Serialize;

// == Cache Stats ==
/// Tracks cache performance metrics.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    /// Number of lookups that found a live entry
    pub hits: u64,
    /// Number of lookups that found nothing
    pub misses: u64,
    /// Number of entries removed by reaper sweeps
    pub evictions: u64,
    /// Number of reaper sweeps run so far
    pub sweeps: u64,
    /// Current number of entries in the cache
    pub total_entries: usize,
    /// Wall-clock time of the most recent sweep
    pub last_sweep_at: Option<DateTime<Utc>>,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no requests have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    // == Record Sweep ==
    /// Records one completed sweep and the number of entries it removed.
    pub fn record_sweep(&mut self, removed: usize) {
        self.sweeps += 1;
        self.evictions += removed as u64;
        self.last_sweep_at = Some(Utc::now());
    }

    pub fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }
}
