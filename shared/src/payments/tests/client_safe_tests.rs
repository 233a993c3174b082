//! Tests for the client-safe projection

use serde_json::{json, Value};

use crate::errors::SharedError;
use crate::payments::{
    build, client_safe_from_json, to_client_safe, BuildOptions, ClientSafeError, ErrorContext,
    KNOWN_CODES, CLIENT_SAFE_FIELDS,
};

fn sensitive_context() -> ErrorContext {
    ErrorContext::new("create_subscription", "sub_internal_42")
        .with_user_id("user_secret_7")
        .with_request_id("req_secret_8")
}

fn object_keys(value: &Value) -> Vec<String> {
    let mut keys: Vec<String> = value.as_object().unwrap().keys().cloned().collect();
    keys.sort();
    keys
}

fn expected_keys() -> Vec<String> {
    let mut keys: Vec<String> = CLIENT_SAFE_FIELDS.iter().map(|k| k.to_string()).collect();
    keys.sort();
    keys
}

#[test]
fn test_projection_has_exactly_the_whitelisted_fields() {
    for code in KNOWN_CODES.iter().copied().chain(["brand_new_code"]) {
        let error = build(
            code,
            "stripe said: secret internal detail",
            sensitive_context(),
            BuildOptions::default(),
        )
        .unwrap();
        let value = serde_json::to_value(to_client_safe(&error)).unwrap();

        assert_eq!(object_keys(&value), expected_keys(), "{}", code);
        assert!(value.get("message").is_none());
        assert!(value.get("context").is_none());
    }
}

#[test]
fn test_projection_never_leaks_internals() {
    let error = build(
        "api_error",
        "stripe said: secret internal detail",
        sensitive_context(),
        BuildOptions::default(),
    )
    .unwrap();
    let body = serde_json::to_string(&to_client_safe(&error)).unwrap();

    for secret in ["secret internal detail", "user_secret_7", "req_secret_8", "sub_internal_42"] {
        assert!(!body.contains(secret), "leaked {}", secret);
    }
}

#[test]
fn test_projection_copies_values_one_to_one() {
    let error = build(
        "rate_limit",
        "429",
        sensitive_context(),
        BuildOptions::new().with_retry_after(1500),
    )
    .unwrap();
    let safe = ClientSafeError::from(&error);

    assert_eq!(&safe.code, error.code());
    assert_eq!(safe.user_message, error.user_message());
    assert_eq!(safe.retryable, error.is_retryable());
    assert_eq!(safe.retry_after, Some(1500));
    assert_eq!(safe.error_id, error.error_id());
    assert_eq!(safe.category, error.category());
    assert_eq!(safe.severity, error.severity());
}

#[test]
fn test_non_retryable_serializes_null_retry_after() {
    let error = build("card_declined", "x", sensitive_context(), BuildOptions::default()).unwrap();
    let value = serde_json::to_value(to_client_safe(&error)).unwrap();
    assert_eq!(value["retryAfter"], Value::Null);
    assert_eq!(value["retryable"], false);
}

#[test]
fn test_from_json_round_trip_of_built_error() {
    let error = build("api_connection_error", "reset", sensitive_context(), BuildOptions::default())
        .unwrap();
    let raw = serde_json::to_value(&error).unwrap();

    let safe = client_safe_from_json(&raw).unwrap();
    assert_eq!(safe, to_client_safe(&error));
}

#[test]
fn test_from_json_accepts_minimal_context() {
    let raw = json!({
        "code": "card_declined",
        "message": "declined",
        "userMessage": "Your card was declined.",
        "errorId": "err_1700000000000_abc123xyz",
        "category": "payment_method",
        "severity": "low",
        "retryable": false,
        "context": {
            "operation": "charge",
            "resource": "cus_1",
            "timestamp": "2025-01-05T12:00:00Z"
        }
    });

    let safe = client_safe_from_json(&raw).unwrap();
    assert_eq!(safe.error_id, "err_1700000000000_abc123xyz");
    assert_eq!(safe.retry_after, None);
}

#[test]
fn test_from_json_rejects_malformed_shapes() {
    let valid = json!({
        "code": "rate_limit",
        "message": "429",
        "userMessage": "Slow down",
        "errorId": "err_1_abc",
        "category": "infrastructure",
        "severity": "medium",
        "retryable": true,
        "retryAfter": 1000,
        "context": {
            "operation": "charge",
            "resource": "cus_1",
            "timestamp": "2025-01-05T12:00:00Z"
        }
    });
    assert!(client_safe_from_json(&valid).is_ok());

    let mut cases: Vec<Value> = vec![json!(null), json!("rate_limit"), json!([1, 2, 3])];

    for field in [
        "code",
        "message",
        "userMessage",
        "errorId",
        "category",
        "severity",
        "retryable",
        "context",
    ] {
        let mut missing = valid.clone();
        missing.as_object_mut().unwrap().remove(field);
        cases.push(missing);
    }

    let mut bad_code = valid.clone();
    bad_code["code"] = json!(429);
    cases.push(bad_code);

    let mut blank_code = valid.clone();
    blank_code["code"] = json!("  ");
    cases.push(blank_code);

    let mut bad_severity = valid.clone();
    bad_severity["severity"] = json!("apocalyptic");
    cases.push(bad_severity);

    let mut retry_without_retryable = valid.clone();
    retry_without_retryable["retryable"] = json!(false);
    cases.push(retry_without_retryable);

    for case in cases {
        let err = client_safe_from_json(&case).unwrap_err();
        assert!(
            matches!(err, SharedError::InvalidErrorShape { .. }),
            "unexpected result for {}",
            case
        );
    }
}
