//! Backend abstraction layer for venue operations.
//!
//! This module defines the interface the page components use to talk to the
//! Fyyur server, along with the response types and error handling. The HTTP
//! implementation lives in [`http`]; tests substitute their own.

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub mod http;

pub use http::HttpVenueBackend;

/// Common error types for backend operations.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Backend error: {0}")]
    Other(String),
}

/// Identifier of a venue, as stored in the delete button's `data-id` attribute.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VenueId(String);

impl VenueId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VenueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for VenueId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Result of a delete request, as reported by the server's JSON body.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize)]
pub struct DeleteOutcome {
    pub success: bool,
}

impl DeleteOutcome {
    /// Read the `success` field of a response body.
    ///
    /// Any JSON value is accepted: the field counts as set when it is truthy in
    /// the JavaScript sense, and a missing field or non-object body is a failure.
    pub fn from_json(body: &Value) -> Self {
        Self {
            success: body.get("success").is_some_and(is_truthy),
        }
    }
}

/// JavaScript truthiness of a JSON value
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Backend trait that venue services must implement.
#[async_trait]
pub trait VenueBackend: Send + Sync {
    /// Returns the backend type identifier (e.g., "http").
    fn backend_type(&self) -> &str;

    /// Delete a venue and report whether the server accepted it.
    async fn delete_venue(&self, venue_id: &VenueId) -> Result<DeleteOutcome, BackendError>;
}
