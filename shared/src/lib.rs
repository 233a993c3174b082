//! Shared utilities and common types for the TenantFlow backend
//!
//! This crate provides functionality used across the API and worker services:
//! - Stripe error classification, retry backoff and client-safe projection
//! - Configuration types (environment, logging, retry policy)
//! - Error types and response structures
//! - Status enums, pricing plans and input validation schemas
//! - Utility functions (formatting, phone numbers, metadata sanitization)

pub mod config;
pub mod errors;
pub mod payments;
pub mod types;
pub mod utils;
pub mod validation;

// Re-export commonly used items at crate root
pub use config::{Environment, LogFormat, LoggingConfig, RetryConfig, SharedConfig};
pub use errors::{error_codes, ErrorResponse, IntoErrorResponse, SharedError, SharedResult};
pub use payments::{
    build, build_from_json, classify, compute_delay, to_client_safe, BuildOptions,
    ClientSafeError, ErrorCategory, ErrorContext, ErrorSeverity, StandardizedError,
    StripeErrorCode,
};
pub use types::{ApiResponse, PlanTier, PricingPlan};
pub use utils::{phone, Validate, ValidationError, ValidationErrors};
