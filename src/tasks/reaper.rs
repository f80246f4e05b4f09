//! Reaper Task
//!
//! Background task that periodically removes entries older than the cache
//! interval, until told to stop.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{oneshot, RwLock};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, error, info};

use crate::cache::CacheStore;

/// Ownership of a running reaper task.
///
/// Dropping the handle without calling [`shutdown`](Self::shutdown) also stops
/// the task at its next wake-up, since the stop channel closes.
#[derive(Debug)]
pub struct ReaperHandle {
    stop: oneshot::Sender<()>,
    task: JoinHandle<()>,
}

impl ReaperHandle {
    /// Stops the reaper and waits for the task to exit.
    ///
    /// A sweep already in progress runs to completion first; once this returns
    /// no further sweep will run.
    pub async fn shutdown(self) {
        // The task may already be gone if it panicked; the join below reports that.
        let _ = self.stop.send(());

        match self.task.await {
            Ok(()) => debug!("Reaper task joined"),
            Err(e) => error!("Reaper task terminated abnormally: {}", e),
        }
    }
}

/// Spawns a background task that sweeps `cache` every `interval`.
///
/// The first sweep is due one full `interval` after this call, measured before
/// the task is first polled, so a slow runtime does not push it back. Each sweep takes
/// the write lock for the whole batch, so it is mutually exclusive with any
/// concurrent add or get.
///
/// Must be called from within a tokio runtime.
///
/// # Example
/// ```ignore
/// let store = Arc::new(RwLock::new(CacheStore::<String>::new(interval)));
/// let reaper = spawn_reaper(store.clone(), interval);
/// // Later, during shutdown:
/// reaper.shutdown().await;
/// ```
pub fn spawn_reaper<V>(cache: Arc<RwLock<CacheStore<V>>>, interval: Duration) -> ReaperHandle
where
    V: Clone + Send + Sync + 'static,
{
    let (stop, mut stop_rx) = oneshot::channel::<()>();
    let first_sweep = Instant::now() + interval;

    let task = tokio::spawn(async move {
        info!("Starting reaper task with interval of {:?}", interval);

        let mut ticker = time::interval_at(first_sweep, interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;
                // Fires on an explicit stop and when the handle is dropped
                _ = &mut stop_rx => break,
                _ = ticker.tick() => {}
            }

            let removed = {
                let mut cache_guard = cache.write().await;
                cache_guard.cleanup_expired()
            };

            if removed > 0 {
                info!("Reaper sweep: removed {} expired entries", removed);
            } else {
                debug!("Reaper sweep: no expired entries found");
            }
        }

        info!("Reaper task stopped");
    });

    ReaperHandle { stop, task }
}
