//! Expiring Cache Module
//!
//! Thread-safe cache handle owning the shared store and its reaper task.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info};

use crate::cache::{CacheStats, CacheStore};
use crate::error::{CacheError, Result};
use crate::tasks::{spawn_reaper, ReaperHandle};

// == Expiring Cache ==
/// In-memory cache whose entries are removed by a background reaper once they
/// are older than the cache interval.
///
/// Share it between callers behind an `Arc`. After [`close`](Self::close) the
/// reaper is gone and the cache keeps serving adds and gets as a plain map
/// whose entries never expire.
#[derive(Debug)]
pub struct ExpiringCache<V> {
    store: Arc<RwLock<CacheStore<V>>>,
    reaper: Mutex<Option<ReaperHandle>>,
    interval: Duration,
}

impl<V> ExpiringCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    // == Constructor ==
    /// Creates an empty cache and starts its reaper.
    ///
    /// `interval` is both the maximum age of an entry and the time between
    /// sweeps. The first sweep runs one `interval` after construction.
    ///
    /// Must be called from within a tokio runtime.
    ///
    /// # Errors
    /// Returns [`CacheError::InvalidInterval`] for a zero interval.
    pub fn new(interval: Duration) -> Result<Self> {
        if interval.is_zero() {
            return Err(CacheError::InvalidInterval(interval));
        }

        let store = Arc::new(RwLock::new(CacheStore::new(interval)));
        let reaper = spawn_reaper(store.clone(), interval);

        Ok(Self {
            store,
            reaper: Mutex::new(Some(reaper)),
            interval,
        })
    }

    // == Add ==
    /// Inserts or overwrites the entry for `key`, resetting its age.
    pub async fn add(&self, key: impl Into<String>, value: V) {
        self.store.write().await.add(key, value);
    }

    // == Get ==
    /// Returns the value stored under `key`, or `None` if it was never added or
    /// has already been reaped.
    pub async fn get(&self, key: &str) -> Option<V> {
        // Write lock: lookups update the hit/miss counters
        self.store.write().await.get(key)
    }

    // == Close ==
    /// Stops the reaper and waits for it to exit.
    ///
    /// Existing entries are kept. Calling this again is a no-op; a concurrent
    /// caller waits until the first close has finished.
    pub async fn close(&self) {
        let mut reaper = self.reaper.lock().await;
        match reaper.take() {
            Some(handle) => {
                handle.shutdown().await;
                info!("Cache closed, reaper stopped");
            }
            None => debug!("Cache already closed"),
        }
    }

    // == Is Closed ==
    /// Returns true once [`close`](Self::close) has stopped the reaper.
    pub async fn is_closed(&self) -> bool {
        self.reaper.lock().await.is_none()
    }

    // == Stats ==
    /// Returns a snapshot of lookup and sweep statistics.
    pub async fn stats(&self) -> CacheStats {
        self.store.read().await.stats()
    }

    // == Length ==
    /// Returns the number of entries currently held, reaped ones excluded.
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    // == Is Empty ==
    /// Returns true if the cache holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }

    // == Interval ==
    /// Returns the maximum entry age, which is also the sweep period.
    pub fn interval(&self) -> Duration {
        self.interval
    }
}
