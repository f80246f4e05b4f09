//! API Module
//!
//! HTTP handlers and routing for the cache service.
//!
//! # Endpoints
//! - `PUT /entries` - Cache a JSON payload under a key
//! - `GET /entries?key=...` - Look up a payload by key
//! - `GET /stats` - Cache and reaper statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
