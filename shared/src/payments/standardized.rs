//! Normalized, request-scoped representation of a payment provider failure

use chrono::{DateTime, Utc};
use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};

use super::registry::{ErrorCategory, ErrorSeverity, StripeErrorCode, DEFAULT_USER_MESSAGE};
use super::retry::compute_delay;
use crate::config::RetryConfig;
use crate::errors::{SharedError, SharedResult};

const ERROR_ID_SUFFIX_LEN: usize = 9;

/// Where the failure happened.
///
/// `user_id` and `request_id` are internal correlation data and never leave
/// the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorContext {
    pub operation: String,
    pub resource: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    timestamp: DateTime<Utc>,
}

impl ErrorContext {
    pub fn new(operation: impl Into<String>, resource: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            resource: resource.into(),
            user_id: None,
            request_id: None,
            timestamp: Utc::now(),
        }
    }

    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    /// Time the error was built, not when the context was created
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

/// Optional knobs for [`build`]
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// Replaces the registry's user message
    pub user_message: Option<String>,
    /// Explicit retry delay in milliseconds; ignored for non-retryable codes
    pub retry_after: Option<u64>,
    /// Attempt number used to compute `retry_after` when none is given
    pub attempt: Option<u32>,
    /// Policy used to compute `retry_after` when none is given
    pub retry_config: Option<RetryConfig>,
}

impl BuildOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user_message(mut self, user_message: impl Into<String>) -> Self {
        self.user_message = Some(user_message.into());
        self
    }

    pub fn with_retry_after(mut self, retry_after_ms: u64) -> Self {
        self.retry_after = Some(retry_after_ms);
        self
    }

    pub fn with_attempt(mut self, attempt: u32) -> Self {
        self.attempt = Some(attempt);
        self
    }

    pub fn with_retry_config(mut self, config: RetryConfig) -> Self {
        self.retry_config = Some(config);
        self
    }

    /// Reject options that would make the retry delay meaningless
    pub fn validate(&self) -> SharedResult<()> {
        if self.attempt == Some(0) {
            return Err(SharedError::invalid_options("attempt is 1-based, got 0"));
        }
        if let Some(config) = &self.retry_config {
            config
                .validate()
                .map_err(|e| SharedError::invalid_options(format!("retry_config: {}", e)))?;
        }
        Ok(())
    }
}

/// A classified payment failure.
///
/// Category, severity and retryability always come from the registry, so
/// the fields are read-only once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandardizedError {
    code: StripeErrorCode,
    message: String,
    user_message: String,
    error_id: String,
    category: ErrorCategory,
    severity: ErrorSeverity,
    retryable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    retry_after: Option<u64>,
    context: ErrorContext,
}

impl StandardizedError {
    pub fn code(&self) -> &StripeErrorCode {
        &self.code
    }

    /// Internal diagnostic message; never shown to users
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn user_message(&self) -> &str {
        &self.user_message
    }

    pub fn error_id(&self) -> &str {
        &self.error_id
    }

    pub fn category(&self) -> ErrorCategory {
        self.category
    }

    pub fn severity(&self) -> ErrorSeverity {
        self.severity
    }

    pub fn is_retryable(&self) -> bool {
        self.retryable
    }

    /// Suggested wait in milliseconds, only set for retryable errors
    pub fn retry_after(&self) -> Option<u64> {
        self.retry_after
    }

    pub fn context(&self) -> &ErrorContext {
        &self.context
    }
}

/// Build a standardized error from a provider code.
///
/// Blank codes and invalid options are rejected. Unrecognised codes are
/// accepted and classify as `unknown`.
pub fn build(
    code: &str,
    message: impl Into<String>,
    context: ErrorContext,
    options: BuildOptions,
) -> SharedResult<StandardizedError> {
    if code.trim().is_empty() {
        return Err(SharedError::invalid_code("code must be a non-empty string"));
    }
    options.validate()?;
    Ok(assemble(
        StripeErrorCode::parse(code),
        message.into(),
        context,
        options,
    ))
}

/// Build from an untyped JSON code value, as received from a webhook body or
/// a deserialized SDK error.
pub fn build_from_json(
    code: &serde_json::Value,
    message: impl Into<String>,
    context: ErrorContext,
    options: BuildOptions,
) -> SharedResult<StandardizedError> {
    match code {
        serde_json::Value::String(code) => build(code, message, context, options),
        other => Err(SharedError::invalid_code(format!(
            "expected a string, got {}",
            json_type_name(other)
        ))),
    }
}

fn assemble(
    code: StripeErrorCode,
    message: String,
    mut context: ErrorContext,
    options: BuildOptions,
) -> StandardizedError {
    let now = Utc::now();
    context.timestamp = now;

    let category = code.category();
    let severity = code.severity();
    let retryable = code.is_retryable();

    let retry_after = if retryable {
        options.retry_after.or_else(|| {
            let config = options.retry_config.unwrap_or_default();
            Some(compute_delay(options.attempt.unwrap_or(1), &config))
        })
    } else {
        None
    };

    let user_message = options
        .user_message
        .or_else(|| code.user_message().map(str::to_string))
        .unwrap_or_else(|| DEFAULT_USER_MESSAGE.to_string());

    let error_id = generate_error_id(now);

    if !code.is_known() {
        warn!(code = %code, error_id = %error_id, "Unrecognized Stripe error code");
    }
    if severity == ErrorSeverity::Critical {
        error!(
            code = %code,
            error_id = %error_id,
            operation = %context.operation,
            "Critical payment error: {}",
            message
        );
    } else {
        debug!(
            code = %code,
            error_id = %error_id,
            category = %category,
            severity = %severity,
            retryable,
            operation = %context.operation,
            "Standardized payment error"
        );
    }

    StandardizedError {
        code,
        message,
        user_message,
        error_id,
        category,
        severity,
        retryable,
        retry_after,
        context,
    }
}

/// `err_<unix millis>_<9 random lowercase alphanumerics>`
pub fn generate_error_id(now: DateTime<Utc>) -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(ERROR_ID_SUFFIX_LEN)
        .map(|b| char::from(b).to_ascii_lowercase())
        .collect();
    format!("err_{}_{}", now.timestamp_millis(), suffix)
}

pub(crate) fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
