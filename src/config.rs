//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::time::Duration;

use crate::error::{CacheError, Result};

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Reap interval in milliseconds: both the maximum entry age and the sweep period
    pub interval_ms: u64,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_INTERVAL_MS` - Reap interval in milliseconds (default: 5000)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            interval_ms: env::var("CACHE_INTERVAL_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.interval_ms),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),
        }
    }

    /// Reap interval as a `Duration`.
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    /// Rejects settings the cache cannot be built with.
    pub fn validate(&self) -> Result<()> {
        if self.interval_ms == 0 {
            return Err(CacheError::InvalidInterval(self.interval()));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            interval_ms: 5000,
            server_port: 3000,
        }
    }
}
