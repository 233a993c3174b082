//! Projection of a standardized error onto the fields a client may see

use serde::{Deserialize, Serialize};

use super::registry::{ErrorCategory, ErrorSeverity, StripeErrorCode};
use super::standardized::{json_type_name, StandardizedError};
use crate::errors::{SharedError, SharedResult};

/// Field names a client-safe error serializes to, in order
pub const CLIENT_SAFE_FIELDS: [&str; 7] = [
    "code",
    "userMessage",
    "retryable",
    "retryAfter",
    "errorId",
    "category",
    "severity",
];

/// The only error shape allowed into an HTTP response body.
///
/// `retryAfter` is always serialized (as `null` when absent) so the shape is
/// fixed for the frontend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientSafeError {
    pub code: StripeErrorCode,
    pub user_message: String,
    pub retryable: bool,
    pub retry_after: Option<u64>,
    pub error_id: String,
    pub category: ErrorCategory,
    pub severity: ErrorSeverity,
}

pub fn to_client_safe(error: &StandardizedError) -> ClientSafeError {
    ClientSafeError {
        code: error.code().clone(),
        user_message: error.user_message().to_string(),
        retryable: error.is_retryable(),
        retry_after: error.retry_after(),
        error_id: error.error_id().to_string(),
        category: error.category(),
        severity: error.severity(),
    }
}

/// Project an untyped value, failing unless it has the standardized shape
pub fn client_safe_from_json(value: &serde_json::Value) -> SharedResult<ClientSafeError> {
    if !value.is_object() {
        return Err(SharedError::invalid_shape(format!(
            "expected an object, got {}",
            json_type_name(value)
        )));
    }

    let error = StandardizedError::deserialize(value)
        .map_err(|e| SharedError::invalid_shape(e.to_string()))?;

    if error.code().as_str().trim().is_empty() {
        return Err(SharedError::invalid_shape("code must be a non-empty string"));
    }
    if error.retry_after().is_some() && !error.is_retryable() {
        return Err(SharedError::invalid_shape(
            "retryAfter is only allowed on retryable errors",
        ));
    }

    Ok(to_client_safe(&error))
}

impl From<&StandardizedError> for ClientSafeError {
    fn from(error: &StandardizedError) -> Self {
        to_client_safe(error)
    }
}

impl From<StandardizedError> for ClientSafeError {
    fn from(error: StandardizedError) -> Self {
        to_client_safe(&error)
    }
}
