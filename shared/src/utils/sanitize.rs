//! Metadata sanitization for payment provider objects
//!
//! Provider metadata is a flat string-to-string map with hard limits on key
//! count and sizes. Anything that would be rejected is dropped or trimmed
//! here instead of failing the provider call.

use serde_json::Value;
use std::collections::BTreeMap;
use tracing::debug;

pub const MAX_METADATA_KEYS: usize = 50;
pub const MAX_KEY_CHARS: usize = 40;
pub const MAX_VALUE_CHARS: usize = 500;

/// Flatten arbitrary JSON metadata into provider-compatible pairs.
///
/// Scalars are stringified; nulls, arrays and nested objects are dropped.
/// Keys are kept in sorted order so the first 50 survive deterministically.
pub fn sanitize_metadata(metadata: &Value) -> BTreeMap<String, String> {
    let Some(object) = metadata.as_object() else {
        return BTreeMap::new();
    };

    let mut sanitized = BTreeMap::new();
    let mut dropped = 0usize;

    for (raw_key, raw_value) in object {
        let key = strip_control_chars(raw_key.trim());
        if key.is_empty() || key.chars().count() > MAX_KEY_CHARS {
            dropped += 1;
            continue;
        }

        let value = match raw_value {
            Value::String(s) => strip_control_chars(s),
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Null | Value::Array(_) | Value::Object(_) => {
                dropped += 1;
                continue;
            }
        };

        sanitized.insert(key, value.chars().take(MAX_VALUE_CHARS).collect());
    }

    if sanitized.len() > MAX_METADATA_KEYS {
        dropped += sanitized.len() - MAX_METADATA_KEYS;
        sanitized = sanitized.into_iter().take(MAX_METADATA_KEYS).collect();
    }

    if dropped > 0 {
        debug!(dropped, kept = sanitized.len(), "Dropped metadata entries");
    }

    sanitized
}

fn strip_control_chars(value: &str) -> String {
    value.chars().filter(|c| !c.is_control()).collect()
}
