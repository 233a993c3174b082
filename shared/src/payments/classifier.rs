//! String-level classification helpers over the registry.
//!
//! These are total: any string, recognised or not, yields a value.

use super::registry::{ErrorCategory, ErrorSeverity, StripeErrorCode};

pub fn category_of(code: &str) -> ErrorCategory {
    StripeErrorCode::parse(code).category()
}

pub fn severity_of(code: &str) -> ErrorSeverity {
    StripeErrorCode::parse(code).severity()
}

pub fn is_retryable(code: &str) -> bool {
    StripeErrorCode::parse(code).is_retryable()
}

/// Category, severity and retryability in one lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub category: ErrorCategory,
    pub severity: ErrorSeverity,
    pub retryable: bool,
}

pub fn classify(code: &StripeErrorCode) -> Classification {
    Classification {
        category: code.category(),
        severity: code.severity(),
        retryable: code.is_retryable(),
    }
}
