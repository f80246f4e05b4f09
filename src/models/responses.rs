//! Response DTOs for the cache service API
//!
//! Defines the structure of outgoing HTTP response bodies.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::cache::CacheStats;

/// Response body for a lookup hit (GET /entries?key=...)
#[derive(Debug, Clone, Serialize)]
pub struct GetResponse {
    /// The requested key
    pub key: String,
    /// The stored JSON payload
    pub value: Value,
}

impl GetResponse {
    pub fn new(key: impl Into<String>, value: Value) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

/// Response body for the add operation (PUT /entries)
#[derive(Debug, Clone, Serialize)]
pub struct AddResponse {
    /// Success message
    pub message: String,
    /// The key that was stored
    pub key: String,
}

impl AddResponse {
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            message: format!("Key '{}' cached successfully", key),
            key,
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub hits: u64,
    pub misses: u64,
    /// Entries removed by reaper sweeps
    pub evictions: u64,
    /// Reaper sweeps run so far
    pub sweeps: u64,
    /// Current number of entries in cache
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
    /// Cache interval in milliseconds
    pub interval_ms: u64,
    /// Whether the reaper has been stopped
    pub closed: bool,
    /// Wall-clock time of the most recent sweep
    pub last_sweep_at: Option<DateTime<Utc>>,
}

impl StatsResponse {
    /// Creates a new StatsResponse from cache statistics
    pub fn new(stats: &CacheStats, interval_ms: u64, closed: bool) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            sweeps: stats.sweeps,
            total_entries: stats.total_entries,
            hit_rate: stats.hit_rate(),
            interval_ms,
            closed,
            last_sweep_at: stats.last_sweep_at,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}
