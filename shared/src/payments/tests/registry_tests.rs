//! Unit tests for the error code registry and classifier

use crate::payments::{
    category_of, classify, is_retryable, severity_of, ErrorCategory, ErrorSeverity,
    StripeErrorCode, KNOWN_CODES,
};

#[test]
fn test_card_declined_is_payment_method() {
    assert_eq!(category_of("card_declined"), ErrorCategory::PaymentMethod);
    assert_eq!(severity_of("card_declined"), ErrorSeverity::Low);
    assert!(!is_retryable("card_declined"));
}

#[test]
fn test_rate_limit_is_retryable_infrastructure() {
    assert_eq!(category_of("rate_limit"), ErrorCategory::Infrastructure);
    assert_eq!(severity_of("rate_limit"), ErrorSeverity::Medium);
    assert!(is_retryable("rate_limit"));
}

#[test]
fn test_configuration_errors_are_critical() {
    for code in [
        "authentication_error",
        "permission_error",
        "account_invalid",
        "secret_key_required",
    ] {
        assert_eq!(category_of(code), ErrorCategory::Configuration, "{}", code);
        assert_eq!(severity_of(code), ErrorSeverity::Critical, "{}", code);
        assert!(!is_retryable(code), "{}", code);
    }
}

#[test]
fn test_api_error_is_stripe_service() {
    assert_eq!(category_of("api_error"), ErrorCategory::StripeService);
    assert_eq!(severity_of("api_error"), ErrorSeverity::High);
    assert!(is_retryable("api_error"));
}

#[test]
fn test_unknown_codes_fall_back() {
    for code in ["", "   ", "totally_new_code", "CARD_DECLINED", "card_declined ", "日本語"] {
        assert_eq!(category_of(code), ErrorCategory::Unknown, "{:?}", code);
        assert_eq!(severity_of(code), ErrorSeverity::Medium, "{:?}", code);
        assert!(!is_retryable(code), "{:?}", code);
    }
}

#[test]
fn test_every_known_code_has_an_entry() {
    for code in KNOWN_CODES {
        let parsed = StripeErrorCode::parse(code);
        assert!(parsed.is_known(), "{} parsed as Other", code);
        assert_eq!(parsed.as_str(), *code);
        assert_ne!(parsed.category(), ErrorCategory::Unknown, "{}", code);
    }
}

#[test]
fn test_classification_is_deterministic() {
    for code in KNOWN_CODES.iter().copied().chain(["mystery", ""]) {
        let first = classify(&StripeErrorCode::parse(code));
        for _ in 0..5 {
            assert_eq!(classify(&StripeErrorCode::parse(code)), first);
        }
        assert_eq!(first.category, category_of(code));
        assert_eq!(first.severity, severity_of(code));
        assert_eq!(first.retryable, is_retryable(code));
    }
}

#[test]
fn test_retryable_codes() {
    let retryable: Vec<&str> = KNOWN_CODES
        .iter()
        .copied()
        .filter(|code| is_retryable(code))
        .collect();
    assert_eq!(
        retryable,
        vec![
            "processing_error",
            "rate_limit",
            "api_connection_error",
            "lock_timeout",
            "api_error",
            "idempotency_key_in_use",
        ]
    );
}

#[test]
fn test_user_messages() {
    assert!(StripeErrorCode::CardDeclined.user_message().is_some());
    assert!(StripeErrorCode::RateLimit.user_message().is_some());
    assert!(StripeErrorCode::AuthenticationError.user_message().is_none());
    assert!(StripeErrorCode::parse("whatever").user_message().is_none());
}

#[test]
fn test_code_serde_as_plain_string() {
    let json = serde_json::to_string(&StripeErrorCode::InsufficientFunds).unwrap();
    assert_eq!(json, "\"insufficient_funds\"");

    let other: StripeErrorCode = serde_json::from_str("\"brand_new\"").unwrap();
    assert_eq!(other, StripeErrorCode::Other("brand_new".to_string()));
    assert_eq!(other.to_string(), "brand_new");

    assert!(serde_json::from_str::<StripeErrorCode>("42").is_err());
}

#[test]
fn test_category_and_severity_serde() {
    assert_eq!(
        serde_json::to_string(&ErrorCategory::PaymentMethod).unwrap(),
        "\"payment_method\""
    );
    assert_eq!(
        serde_json::to_string(&ErrorCategory::StripeService).unwrap(),
        "\"stripe_service\""
    );
    assert_eq!(
        serde_json::to_string(&ErrorSeverity::Critical).unwrap(),
        "\"critical\""
    );
    assert!(ErrorSeverity::Critical > ErrorSeverity::High);
    assert!(ErrorSeverity::Low < ErrorSeverity::Medium);
}
