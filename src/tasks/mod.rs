//! Background Tasks Module
//!
//! Contains background tasks that run periodically while a cache is alive.
//!
//! # Tasks
//! - Reaper: removes entries older than the cache interval on every tick

mod reaper;

pub use reaper::{spawn_reaper, ReaperHandle};
