//! Tests for standardized error construction

use std::collections::HashSet;

use chrono::Utc;
use serde_json::json;

use crate::config::RetryConfig;
use crate::errors::SharedError;
use crate::payments::{
    build, build_from_json, generate_error_id, is_retryable, BuildOptions, ErrorCategory,
    ErrorContext, ErrorSeverity, StripeErrorCode, DEFAULT_USER_MESSAGE, KNOWN_CODES,
};

fn charge_context() -> ErrorContext {
    ErrorContext::new("charge", "cus_123")
}

#[test]
fn test_authentication_error_is_critical_with_generic_message() {
    let error = build(
        "authentication_error",
        "key invalid",
        charge_context(),
        BuildOptions::default(),
    )
    .unwrap();

    assert_eq!(error.code(), &StripeErrorCode::AuthenticationError);
    assert_eq!(error.category(), ErrorCategory::Configuration);
    assert_eq!(error.severity(), ErrorSeverity::Critical);
    assert!(!error.is_retryable());
    assert_eq!(error.retry_after(), None);
    assert_eq!(error.user_message(), DEFAULT_USER_MESSAGE);
    assert_eq!(error.message(), "key invalid");
    assert_eq!(error.context().operation, "charge");
    assert_eq!(error.context().resource, "cus_123");
}

#[test]
fn test_curated_user_message() {
    let error = build(
        "insufficient_funds",
        "charge failed",
        charge_context(),
        BuildOptions::default(),
    )
    .unwrap();
    assert_eq!(
        error.user_message(),
        StripeErrorCode::InsufficientFunds.user_message().unwrap()
    );
}

#[test]
fn test_user_message_override() {
    let error = build(
        "card_declined",
        "declined by issuer",
        charge_context(),
        BuildOptions::new().with_user_message("Please call your bank."),
    )
    .unwrap();
    assert_eq!(error.user_message(), "Please call your bank.");
}

#[test]
fn test_retryable_matches_classifier_for_all_codes() {
    for code in KNOWN_CODES.iter().copied().chain(["novel_code"]) {
        let error = build(code, "failure", charge_context(), BuildOptions::default()).unwrap();
        assert_eq!(error.is_retryable(), is_retryable(code), "{}", code);
        assert_eq!(error.retry_after().is_some(), error.is_retryable(), "{}", code);
    }
}

#[test]
fn test_retry_after_defaults_to_first_attempt_delay() {
    let error = build("rate_limit", "429", charge_context(), BuildOptions::default()).unwrap();
    let retry_after = error.retry_after().unwrap();
    assert!((1000..1100).contains(&retry_after));
}

#[test]
fn test_retry_after_from_attempt_and_config() {
    let config = RetryConfig::default().with_jitter_ms(0);
    let error = build(
        "api_connection_error",
        "connection reset",
        charge_context(),
        BuildOptions::new().with_attempt(3).with_retry_config(config),
    )
    .unwrap();
    assert_eq!(error.retry_after(), Some(4000));
}

#[test]
fn test_explicit_retry_after_ignored_for_non_retryable() {
    let explicit = build(
        "api_error",
        "500",
        charge_context(),
        BuildOptions::new().with_retry_after(2500),
    )
    .unwrap();
    assert_eq!(explicit.retry_after(), Some(2500));

    let ignored = build(
        "expired_card",
        "exp 01/20",
        charge_context(),
        BuildOptions::new().with_retry_after(2500),
    )
    .unwrap();
    assert_eq!(ignored.retry_after(), None);
}

#[test]
fn test_unknown_code_is_accepted() {
    let error = build(
        "future_stripe_code",
        "???",
        charge_context(),
        BuildOptions::default(),
    )
    .unwrap();
    assert_eq!(error.code().as_str(), "future_stripe_code");
    assert_eq!(error.category(), ErrorCategory::Unknown);
    assert_eq!(error.severity(), ErrorSeverity::Medium);
    assert_eq!(error.user_message(), DEFAULT_USER_MESSAGE);
}

#[test]
fn test_blank_code_is_rejected() {
    for code in ["", "   ", "\n"] {
        let err = build(code, "x", charge_context(), BuildOptions::default()).unwrap_err();
        assert!(matches!(err, SharedError::InvalidErrorCode { .. }));
    }
}

#[test]
fn test_build_from_json_requires_string_code() {
    let ok = build_from_json(
        &json!("card_declined"),
        "declined",
        charge_context(),
        BuildOptions::default(),
    )
    .unwrap();
    assert_eq!(ok.code(), &StripeErrorCode::CardDeclined);

    for value in [json!(null), json!(402), json!(true), json!(["card_declined"]), json!({})] {
        let err = build_from_json(&value, "x", charge_context(), BuildOptions::default())
            .unwrap_err();
        match err {
            SharedError::InvalidErrorCode { reason } => {
                assert!(reason.starts_with("expected a string"), "{}", reason)
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}

#[test]
fn test_zero_attempt_is_rejected_not_panicking() {
    let err = build(
        "rate_limit",
        "429",
        charge_context(),
        BuildOptions::new().with_attempt(0),
    )
    .unwrap_err();
    assert!(matches!(err, SharedError::InvalidOptions { .. }));
    assert_eq!(err.code(), "INVALID_OPTIONS");

    // Options are checked whether or not the code is retryable
    let err = build(
        "card_declined",
        "declined",
        charge_context(),
        BuildOptions::new().with_attempt(0),
    )
    .unwrap_err();
    assert!(matches!(err, SharedError::InvalidOptions { .. }));
}

#[test]
fn test_invalid_retry_config_is_rejected() {
    let bad_configs = [
        RetryConfig::default().with_exponential_base(-2.0),
        RetryConfig::default().with_exponential_base(f64::NAN),
        RetryConfig::default().with_max_attempts(0),
        RetryConfig::default()
            .with_base_delay_ms(5000)
            .with_max_delay_ms(1000),
    ];

    for config in bad_configs {
        let err = build(
            "api_connection_error",
            "reset",
            charge_context(),
            BuildOptions::new().with_retry_config(config).with_attempt(2),
        )
        .unwrap_err();
        match err {
            SharedError::InvalidOptions { reason } => {
                assert!(reason.starts_with("retry_config"), "{}", reason)
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}

#[test]
fn test_valid_options_pass_validation() {
    assert!(BuildOptions::default().validate().is_ok());
    assert!(BuildOptions::new()
        .with_attempt(1)
        .with_retry_config(RetryConfig::development())
        .validate()
        .is_ok());
}

#[test]
fn test_timestamp_is_stamped_at_build_time() {
    let context = charge_context().with_user_id("user_1").with_request_id("req_1");
    let created = context.timestamp();
    std::thread::sleep(std::time::Duration::from_millis(5));

    let before = Utc::now();
    let error = build("card_declined", "x", context, BuildOptions::default()).unwrap();
    let after = Utc::now();

    let stamped = error.context().timestamp();
    assert!(stamped > created);
    assert!(stamped >= before && stamped <= after);
    assert_eq!(error.context().user_id.as_deref(), Some("user_1"));
    assert_eq!(error.context().request_id.as_deref(), Some("req_1"));
}

#[test]
fn test_error_id_format() {
    let now = Utc::now();
    let id = generate_error_id(now);
    let parts: Vec<&str> = id.split('_').collect();

    assert_eq!(parts.len(), 3);
    assert_eq!(parts[0], "err");
    assert_eq!(parts[1], now.timestamp_millis().to_string());
    assert_eq!(parts[2].len(), 9);
    assert!(parts[2]
        .chars()
        .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
}

#[test]
fn test_error_ids_are_unique() {
    let ids: HashSet<String> = (0..1000)
        .map(|_| {
            build("rate_limit", "x", charge_context(), BuildOptions::default())
                .unwrap()
                .error_id()
                .to_string()
        })
        .collect();
    assert_eq!(ids.len(), 1000);
}

#[test]
fn test_error_ids_unique_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| {
            std::thread::spawn(|| {
                (0..250)
                    .map(|_| generate_error_id(Utc::now()))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut ids = HashSet::new();
    for handle in handles {
        for id in handle.join().unwrap() {
            assert!(ids.insert(id));
        }
    }
    assert_eq!(ids.len(), 1000);
}

#[test]
fn test_serialized_shape_is_camel_case() {
    let error = build(
        "rate_limit",
        "too many requests",
        charge_context().with_user_id("user_9"),
        BuildOptions::default(),
    )
    .unwrap();
    let value = serde_json::to_value(&error).unwrap();

    assert_eq!(value["code"], "rate_limit");
    assert_eq!(value["userMessage"], error.user_message());
    assert_eq!(value["errorId"], error.error_id());
    assert_eq!(value["category"], "infrastructure");
    assert_eq!(value["severity"], "medium");
    assert_eq!(value["retryable"], true);
    assert!(value["retryAfter"].is_u64());
    assert_eq!(value["context"]["userId"], "user_9");
    assert!(value["context"]["timestamp"].is_string());
}
