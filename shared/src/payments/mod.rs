//! Stripe error classification and retry policy
//!
//! Flow for a failed provider call:
//! 1. classify the provider code (`category_of`, `severity_of`, `is_retryable`)
//! 2. if retryable, compute a backoff delay (`compute_delay`)
//! 3. build a [`StandardizedError`] for logging and internal handling
//! 4. project it with [`to_client_safe`] before it goes into a response body
//!
//! Nothing in this module performs retries or alerting; it only decides.

mod classifier;
mod client_safe;
mod registry;
mod retry;
mod standardized;

#[cfg(test)]
mod tests;

pub use classifier::{category_of, classify, is_retryable, severity_of, Classification};
pub use client_safe::{client_safe_from_json, to_client_safe, ClientSafeError, CLIENT_SAFE_FIELDS};
pub use registry::{
    ErrorCategory, ErrorSeverity, StripeErrorCode, DEFAULT_USER_MESSAGE, KNOWN_CODES,
};
pub use retry::{base_delay, compute_delay, compute_delay_with_rng, retry_delay_for};
pub use standardized::{
    build, build_from_json, generate_error_id, BuildOptions, ErrorContext, StandardizedError,
};
