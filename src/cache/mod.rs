//! Cache Module
//!
//! Provides a generic in-memory cache whose entries are reaped in the
//! background once they outlive the cache-wide interval.

mod entry;
mod expiring;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use expiring::ExpiringCache;
pub use stats::CacheStats;
pub use store::CacheStore;
