//! Request DTOs for the cache service API
//!
//! Defines the structure of incoming HTTP request bodies and query strings.

use serde::Deserialize;
use serde_json::Value;

/// Maximum accepted key length in bytes (keys are usually full request URLs)
pub const MAX_KEY_LENGTH: usize = 2048;

/// Request body for the add operation (PUT /entries)
///
/// # Fields
/// - `key`: Request URL (or other identifier) the value is cached under
/// - `value`: Arbitrary JSON payload, stored as-is
#[derive(Debug, Clone, Deserialize)]
pub struct AddRequest {
    pub key: String,
    pub value: Value,
}

impl AddRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        validate_key(&self.key)
    }
}

/// Query string for the lookup operation (GET /entries?key=...)
#[derive(Debug, Clone, Deserialize)]
pub struct KeyQuery {
    pub key: String,
}

impl KeyQuery {
    pub fn validate(&self) -> Option<String> {
        validate_key(&self.key)
    }
}

fn validate_key(key: &str) -> Option<String> {
    if key.is_empty() {
        return Some("Key cannot be empty".to_string());
    }
    if key.len() > MAX_KEY_LENGTH {
        return Some(format!(
            "Key exceeds maximum length of {} bytes",
            MAX_KEY_LENGTH
        ));
    }
    None
}
