//! Shared error response structures
//!
//! Domain crates return typed errors. The calling layer translates them into an
//! [`ErrorResponse`] through [`IntoErrorResponse`] before showing them to a user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Standard error response structure handed to the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for client identification
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// Additional error details (field errors, etc.)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, serde_json::Value>>,

    /// Timestamp when the error occurred
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Create a new error response stamped with the given instant
    pub fn new(error: impl Into<String>, message: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            details: None,
            timestamp,
        }
    }

    /// Add a detail field to the error response
    pub fn add_detail(mut self, key: impl Into<String>, value: impl Serialize) -> Self {
        let details = self.details.get_or_insert_with(HashMap::new);
        if let Ok(json_value) = serde_json::to_value(value) {
            details.insert(key.into(), json_value);
        }
        self
    }
}

/// Error codes for credential failures
pub mod error_codes {
    pub const ARGUMENT_NULL: &str = "ARGUMENT_NULL";
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
    pub const EMAIL_INVALID: &str = "EMAIL_INVALID";
    pub const PASSWORD_INVALID: &str = "PASSWORD_INVALID";
    pub const PASSWORD_EXPIRED: &str = "PASSWORD_EXPIRED";
    pub const PASSWORD_MUST_CHANGE: &str = "PASSWORD_MUST_CHANGE";
    pub const VERIFICATION_CODE_INVALID: &str = "VERIFICATION_CODE_INVALID";
    pub const VERIFICATION_CODE_EXPIRED: &str = "VERIFICATION_CODE_EXPIRED";
}

/// Trait for converting errors to ErrorResponse
pub trait IntoErrorResponse {
    fn to_error_response(&self, timestamp: DateTime<Utc>) -> ErrorResponse;
}
