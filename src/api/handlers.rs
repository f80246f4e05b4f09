//! API Handlers
//!
//! HTTP request handlers for each cache service endpoint.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Query, State},
    Json,
};
use serde_json::Value;

use crate::cache::ExpiringCache;
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::models::{AddRequest, AddResponse, GetResponse, HealthResponse, KeyQuery, StatsResponse};

/// Application state shared across all handlers.
///
/// Holds the one cache instance for the process; the cache does its own locking.
#[derive(Clone)]
pub struct AppState {
    pub cache: Arc<ExpiringCache<Value>>,
}

impl AppState {
    pub fn new(cache: ExpiringCache<Value>) -> Self {
        Self {
            cache: Arc::new(cache),
        }
    }

    /// Creates a new AppState from configuration, starting the cache reaper.
    ///
    /// Must be called from within a tokio runtime.
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;
        let cache = ExpiringCache::new(config.interval())?;
        Ok(Self::new(cache))
    }
}

/// Handler for PUT /entries
///
/// Stores a JSON payload under its request key, resetting the key's age.
pub async fn add_handler(
    State(state): State<AppState>,
    Json(req): Json<AddRequest>,
) -> Result<Json<AddResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    state.cache.add(req.key.clone(), req.value).await;

    Ok(Json(AddResponse::new(req.key)))
}

/// Handler for GET /entries?key=...
///
/// Looks up a payload by key. Missing and already-reaped keys both map to 404.
pub async fn get_handler(
    State(state): State<AppState>,
    Query(query): Query<KeyQuery>,
) -> Result<Json<GetResponse>> {
    if let Some(error_msg) = query.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    match state.cache.get(&query.key).await {
        Some(value) => Ok(Json(GetResponse::new(query.key, value))),
        None => Err(CacheError::NotFound(query.key)),
    }
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.cache.stats().await;
    let interval_ms = duration_millis(state.cache.interval());
    let closed = state.cache.is_closed().await;

    Json(StatsResponse::new(&stats, interval_ms, closed))
}

/// Whole milliseconds in `duration`, saturating at `u64::MAX`.
fn duration_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
