//! Shared error types and response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::HashMap;
use thiserror::Error;

use crate::payments::ClientSafeError;
use crate::utils::validation::ValidationErrors;

/// Failures raised by the shared package itself.
///
/// Provider error codes that are merely unrecognised are *not* failures; they
/// classify as `unknown`. Only malformed input at a boundary ends up here.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SharedError {
    #[error("Invalid error code: {reason}")]
    InvalidErrorCode { reason: String },

    #[error("Invalid standardized error shape: {reason}")]
    InvalidErrorShape { reason: String },

    #[error("Invalid build options: {reason}")]
    InvalidOptions { reason: String },

    #[error("Validation failed: {message}")]
    Validation { message: String },

    #[error("Invalid configuration for {key}: {reason}")]
    Config { key: String, reason: String },
}

impl SharedError {
    pub fn invalid_code(reason: impl Into<String>) -> Self {
        Self::InvalidErrorCode {
            reason: reason.into(),
        }
    }

    pub fn invalid_shape(reason: impl Into<String>) -> Self {
        Self::InvalidErrorShape {
            reason: reason.into(),
        }
    }

    pub fn invalid_options(reason: impl Into<String>) -> Self {
        Self::InvalidOptions {
            reason: reason.into(),
        }
    }

    /// Stable code used in API error bodies
    pub fn code(&self) -> &'static str {
        match self {
            SharedError::InvalidErrorCode { .. } => error_codes::INVALID_ERROR_CODE,
            SharedError::InvalidErrorShape { .. } => error_codes::INVALID_ERROR_SHAPE,
            SharedError::InvalidOptions { .. } => error_codes::INVALID_OPTIONS,
            SharedError::Validation { .. } => error_codes::VALIDATION_ERROR,
            SharedError::Config { .. } => error_codes::CONFIGURATION_ERROR,
        }
    }
}

/// Result alias for fallible shared operations
pub type SharedResult<T> = Result<T, SharedError>;

/// Standard error response structure used across all API endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for client identification
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// Additional error details (field errors, retry hints, etc.)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, serde_json::Value>>,

    /// Timestamp when the error occurred
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            details: None,
            timestamp: Utc::now(),
        }
    }

    /// Create an error response with details
    pub fn with_details(
        error: impl Into<String>,
        message: impl Into<String>,
        details: HashMap<String, serde_json::Value>,
    ) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            details: Some(details),
            timestamp: Utc::now(),
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

/// Only client-safe fields are copied; the internal message never gets here.
impl From<&ClientSafeError> for ErrorResponse {
    fn from(error: &ClientSafeError) -> Self {
        let mut details = HashMap::from([
            ("code".to_string(), json!(error.code.as_str())),
            ("errorId".to_string(), json!(error.error_id)),
            ("category".to_string(), json!(error.category)),
            ("severity".to_string(), json!(error.severity)),
            ("retryable".to_string(), json!(error.retryable)),
        ]);
        if let Some(retry_after) = error.retry_after {
            details.insert("retryAfter".to_string(), json!(retry_after));
        }
        ErrorResponse::with_details(
            error_codes::PAYMENT_ERROR,
            error.user_message.clone(),
            details,
        )
    }
}

/// Common error codes used across the application
pub mod error_codes {
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    pub const PAYMENT_ERROR: &str = "PAYMENT_ERROR";
    pub const INVALID_ERROR_CODE: &str = "INVALID_ERROR_CODE";
    pub const INVALID_ERROR_SHAPE: &str = "INVALID_ERROR_SHAPE";
    pub const INVALID_OPTIONS: &str = "INVALID_OPTIONS";
    pub const CONFIGURATION_ERROR: &str = "CONFIGURATION_ERROR";
}

/// Trait for converting errors to ErrorResponse
pub trait IntoErrorResponse {
    fn to_error_response(&self) -> ErrorResponse;
}

impl IntoErrorResponse for SharedError {
    fn to_error_response(&self) -> ErrorResponse {
        ErrorResponse::new(self.code(), self.to_string())
    }
}

impl IntoErrorResponse for ClientSafeError {
    fn to_error_response(&self) -> ErrorResponse {
        ErrorResponse::from(self)
    }
}

/// Per-field messages go under the `fields` detail for form rendering
impl IntoErrorResponse for ValidationErrors {
    fn to_error_response(&self) -> ErrorResponse {
        ErrorResponse::new(error_codes::VALIDATION_ERROR, "One or more fields are invalid")
            .add_detail("fields", self.to_field_errors())
    }
}
