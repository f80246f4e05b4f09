//! pokecache - A generic time-expiring in-memory cache
//!
//! Entries share one cache-wide interval; a background reaper removes those
//! older than it. The bundled binary serves a cache of JSON payloads over HTTP.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use cache::ExpiringCache;
pub use config::Config;
pub use error::CacheError;
