//! Field accessors over a raw event object.
//!
//! Two families live here:
//!
//! - lenient readers (`get_*`) that never fail: a missing key or a value of
//!   the wrong JSON type yields the caller's default;
//! - strict readers (`require_*`) used during classification, which report
//!   missing or mistyped fields as a [`ValidationError`].
//!
//! Neither family mutates the map.

use serde_json::{Map, Value};

use crate::error::ValidationError;
use crate::event::HookEventKind;

/// A parsed hook event before classification.
pub type RawEvent = Map<String, Value>;

/// Read a string, falling back to `default` when absent or not a string.
#[must_use]
pub fn get_str(map: &RawEvent, key: &str, default: &str) -> String {
    map.get(key)
        .and_then(Value::as_str)
        .unwrap_or(default)
        .to_string()
}

/// Read an optional string; wrong-typed values read as `None`.
#[must_use]
pub fn get_opt_str(map: &RawEvent, key: &str) -> Option<String> {
    map.get(key).and_then(Value::as_str).map(String::from)
}

/// Read a boolean, falling back to `default` when absent or not a boolean.
#[must_use]
pub fn get_bool(map: &RawEvent, key: &str, default: bool) -> bool {
    map.get(key).and_then(Value::as_bool).unwrap_or(default)
}

/// Read a nested object, falling back to an empty map.
#[must_use]
pub fn get_object(map: &RawEvent, key: &str) -> RawEvent {
    map.get(key)
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_default()
}

/// Check that every name in `names` is present and not `null`.
///
/// # Errors
///
/// Returns [`ValidationError::MissingFields`] listing every missing name, in
/// the order given.
pub fn require_fields(
    map: &RawEvent,
    names: &[&str],
    kind: Option<HookEventKind>,
) -> Result<(), ValidationError> {
    let missing: Vec<String> = names
        .iter()
        .filter(|name| map.get(**name).map_or(true, Value::is_null))
        .map(|name| (*name).to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::MissingFields {
            kind,
            fields: missing,
        })
    }
}

/// Read a required string.
///
/// # Errors
///
/// Returns a [`ValidationError`] if the key is missing or not a string.
pub fn require_str(
    map: &RawEvent,
    key: &str,
    kind: Option<HookEventKind>,
) -> Result<String, ValidationError> {
    require(map, key, kind, "a string", |v| v.as_str().map(String::from))
}

/// Read a required boolean.
///
/// # Errors
///
/// Returns a [`ValidationError`] if the key is missing or not a boolean.
pub fn require_bool(
    map: &RawEvent,
    key: &str,
    kind: Option<HookEventKind>,
) -> Result<bool, ValidationError> {
    require(map, key, kind, "a boolean", Value::as_bool)
}

/// Read a required JSON object.
///
/// # Errors
///
/// Returns a [`ValidationError`] if the key is missing or not an object.
pub fn require_object(
    map: &RawEvent,
    key: &str,
    kind: Option<HookEventKind>,
) -> Result<RawEvent, ValidationError> {
    require(map, key, kind, "a JSON object", |v| v.as_object().cloned())
}

fn require<T>(
    map: &RawEvent,
    key: &str,
    kind: Option<HookEventKind>,
    expected: &'static str,
    extract: impl FnOnce(&Value) -> Option<T>,
) -> Result<T, ValidationError> {
    let value = match map.get(key) {
        Some(value) if !value.is_null() => value,
        _ => {
            return Err(ValidationError::MissingFields {
                kind,
                fields: vec![key.to_string()],
            })
        }
    };

    extract(value).ok_or_else(|| ValidationError::InvalidField {
        kind,
        field: key.to_string(),
        expected,
    })
}
