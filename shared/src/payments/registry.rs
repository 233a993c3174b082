//! Canonical Stripe error code registry
//!
//! One table maps every provider code to its category, severity,
//! retryability and curated user-facing message. Lookups are `match`
//! expressions with a default arm, so codes outside the table still resolve
//! (to `unknown` / `medium` / not retryable / no curated message).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Message shown to users when a code has no curated text
pub const DEFAULT_USER_MESSAGE: &str =
    "An unexpected error occurred while processing your payment. Please try again or contact support.";

/// Every code the registry has an explicit entry for
pub const KNOWN_CODES: &[&str] = &[
    "card_declined",
    "expired_card",
    "incorrect_cvc",
    "incorrect_number",
    "insufficient_funds",
    "invalid_expiry_month",
    "invalid_expiry_year",
    "processing_error",
    "card_not_supported",
    "currency_not_supported",
    "authentication_required",
    "rate_limit",
    "api_connection_error",
    "lock_timeout",
    "api_error",
    "invalid_request_error",
    "parameter_missing",
    "resource_missing",
    "idempotency_key_in_use",
    "authentication_error",
    "permission_error",
    "account_invalid",
    "secret_key_required",
];

/// Coarse grouping of error codes for dashboards and alert routing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    PaymentMethod,
    Infrastructure,
    ClientError,
    StripeService,
    Configuration,
    Unknown,
}

impl ErrorCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::PaymentMethod => "payment_method",
            ErrorCategory::Infrastructure => "infrastructure",
            ErrorCategory::ClientError => "client_error",
            ErrorCategory::StripeService => "stripe_service",
            ErrorCategory::Configuration => "configuration",
            ErrorCategory::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Urgency ranking, ordered from `Low` to `Critical`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorSeverity::Low => "low",
            ErrorSeverity::Medium => "medium",
            ErrorSeverity::High => "high",
            ErrorSeverity::Critical => "critical",
        }
    }
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Provider error code.
///
/// Codes the registry does not know are preserved verbatim in `Other` so they
/// can still be logged and echoed back to the client.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StripeErrorCode {
    // Payment method
    CardDeclined,
    ExpiredCard,
    IncorrectCvc,
    IncorrectNumber,
    InsufficientFunds,
    InvalidExpiryMonth,
    InvalidExpiryYear,
    ProcessingError,
    CardNotSupported,
    CurrencyNotSupported,
    AuthenticationRequired,

    // Infrastructure
    RateLimit,
    ApiConnectionError,
    LockTimeout,

    // Stripe service
    ApiError,

    // Client error
    InvalidRequestError,
    ParameterMissing,
    ResourceMissing,
    IdempotencyKeyInUse,

    // Configuration
    AuthenticationError,
    PermissionError,
    AccountInvalid,
    SecretKeyRequired,

    Other(String),
}

impl StripeErrorCode {
    /// Parse a provider code. Never fails; unknown codes become `Other`.
    pub fn parse(code: &str) -> Self {
        match code {
            "card_declined" => Self::CardDeclined,
            "expired_card" => Self::ExpiredCard,
            "incorrect_cvc" => Self::IncorrectCvc,
            "incorrect_number" => Self::IncorrectNumber,
            "insufficient_funds" => Self::InsufficientFunds,
            "invalid_expiry_month" => Self::InvalidExpiryMonth,
            "invalid_expiry_year" => Self::InvalidExpiryYear,
            "processing_error" => Self::ProcessingError,
            "card_not_supported" => Self::CardNotSupported,
            "currency_not_supported" => Self::CurrencyNotSupported,
            "authentication_required" => Self::AuthenticationRequired,
            "rate_limit" => Self::RateLimit,
            "api_connection_error" => Self::ApiConnectionError,
            "lock_timeout" => Self::LockTimeout,
            "api_error" => Self::ApiError,
            "invalid_request_error" => Self::InvalidRequestError,
            "parameter_missing" => Self::ParameterMissing,
            "resource_missing" => Self::ResourceMissing,
            "idempotency_key_in_use" => Self::IdempotencyKeyInUse,
            "authentication_error" => Self::AuthenticationError,
            "permission_error" => Self::PermissionError,
            "account_invalid" => Self::AccountInvalid,
            "secret_key_required" => Self::SecretKeyRequired,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::CardDeclined => "card_declined",
            Self::ExpiredCard => "expired_card",
            Self::IncorrectCvc => "incorrect_cvc",
            Self::IncorrectNumber => "incorrect_number",
            Self::InsufficientFunds => "insufficient_funds",
            Self::InvalidExpiryMonth => "invalid_expiry_month",
            Self::InvalidExpiryYear => "invalid_expiry_year",
            Self::ProcessingError => "processing_error",
            Self::CardNotSupported => "card_not_supported",
            Self::CurrencyNotSupported => "currency_not_supported",
            Self::AuthenticationRequired => "authentication_required",
            Self::RateLimit => "rate_limit",
            Self::ApiConnectionError => "api_connection_error",
            Self::LockTimeout => "lock_timeout",
            Self::ApiError => "api_error",
            Self::InvalidRequestError => "invalid_request_error",
            Self::ParameterMissing => "parameter_missing",
            Self::ResourceMissing => "resource_missing",
            Self::IdempotencyKeyInUse => "idempotency_key_in_use",
            Self::AuthenticationError => "authentication_error",
            Self::PermissionError => "permission_error",
            Self::AccountInvalid => "account_invalid",
            Self::SecretKeyRequired => "secret_key_required",
            Self::Other(code) => code,
        }
    }

    /// Whether the registry has an explicit entry for this code
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::CardDeclined
            | Self::ExpiredCard
            | Self::IncorrectCvc
            | Self::IncorrectNumber
            | Self::InsufficientFunds
            | Self::InvalidExpiryMonth
            | Self::InvalidExpiryYear
            | Self::ProcessingError
            | Self::CardNotSupported
            | Self::CurrencyNotSupported
            | Self::AuthenticationRequired => ErrorCategory::PaymentMethod,
            Self::RateLimit | Self::ApiConnectionError | Self::LockTimeout => {
                ErrorCategory::Infrastructure
            }
            Self::ApiError => ErrorCategory::StripeService,
            Self::InvalidRequestError
            | Self::ParameterMissing
            | Self::ResourceMissing
            | Self::IdempotencyKeyInUse => ErrorCategory::ClientError,
            Self::AuthenticationError
            | Self::PermissionError
            | Self::AccountInvalid
            | Self::SecretKeyRequired => ErrorCategory::Configuration,
            Self::Other(_) => ErrorCategory::Unknown,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::CardDeclined
            | Self::ExpiredCard
            | Self::IncorrectCvc
            | Self::IncorrectNumber
            | Self::InsufficientFunds
            | Self::InvalidExpiryMonth
            | Self::InvalidExpiryYear
            | Self::CardNotSupported
            | Self::ResourceMissing => ErrorSeverity::Low,
            Self::ProcessingError
            | Self::CurrencyNotSupported
            | Self::AuthenticationRequired
            | Self::RateLimit
            | Self::LockTimeout
            | Self::InvalidRequestError
            | Self::ParameterMissing
            | Self::IdempotencyKeyInUse => ErrorSeverity::Medium,
            Self::ApiConnectionError | Self::ApiError => ErrorSeverity::High,
            Self::AuthenticationError
            | Self::PermissionError
            | Self::AccountInvalid
            | Self::SecretKeyRequired => ErrorSeverity::Critical,
            Self::Other(_) => ErrorSeverity::Medium,
        }
    }

    /// Whether the caller's original operation may be retried automatically
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::ProcessingError
                | Self::RateLimit
                | Self::ApiConnectionError
                | Self::LockTimeout
                | Self::ApiError
                | Self::IdempotencyKeyInUse
        )
    }

    /// Curated display text, `None` when the code has no dedicated message
    pub fn user_message(&self) -> Option<&'static str> {
        let message = match self {
            Self::CardDeclined => "Your card was declined. Please try a different payment method.",
            Self::ExpiredCard => "Your card has expired. Please use a different card.",
            Self::IncorrectCvc => "The security code is incorrect. Please check it and try again.",
            Self::IncorrectNumber => "The card number is incorrect. Please check it and try again.",
            Self::InsufficientFunds => {
                "Your card has insufficient funds. Please use a different payment method."
            }
            Self::InvalidExpiryMonth | Self::InvalidExpiryYear => {
                "The card's expiration date is invalid. Please check it and try again."
            }
            Self::ProcessingError => {
                "An error occurred while processing your card. Please try again."
            }
            Self::CardNotSupported => {
                "This card type is not supported. Please use a different card."
            }
            Self::CurrencyNotSupported => "This card does not support the required currency.",
            Self::AuthenticationRequired => {
                "Your bank requires additional verification. Please complete it and try again."
            }
            Self::RateLimit => "We're experiencing high demand. Please try again in a moment.",
            Self::ApiConnectionError => {
                "We couldn't reach our payment processor. Please try again shortly."
            }
            Self::LockTimeout => "This payment is being updated. Please try again in a moment.",
            Self::ApiError => {
                "Our payment processor is temporarily unavailable. Please try again later."
            }
            Self::ResourceMissing => "The requested billing record could not be found.",
            _ => return None,
        };
        Some(message)
    }
}

impl From<&str> for StripeErrorCode {
    fn from(code: &str) -> Self {
        Self::parse(code)
    }
}

impl From<String> for StripeErrorCode {
    fn from(code: String) -> Self {
        match Self::parse(&code) {
            Self::Other(_) => Self::Other(code),
            known => known,
        }
    }
}

impl From<StripeErrorCode> for String {
    fn from(code: StripeErrorCode) -> Self {
        match code {
            StripeErrorCode::Other(code) => code,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for StripeErrorCode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for StripeErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
