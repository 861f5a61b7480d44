//! Tests for lenient and strict field access.

use cchooks::fields::{get_bool, get_object, get_opt_str, get_str, require_fields, require_str};
use cchooks::HookEventKind;
use serde_json::json;

use super::{minimal_payloads, raw};

#[test]
fn test_lenient_accessors_are_idempotent() {
    let event = raw(minimal_payloads().remove(0));
    let before = event.clone();

    for _ in 0..2 {
        assert_eq!(get_str(&event, "tool_name", ""), "Write");
        assert_eq!(get_str(&event, "absent", "fallback"), "fallback");
        assert_eq!(get_opt_str(&event, "cwd"), None);
        assert!(get_bool(&event, "absent", true));
        assert_eq!(get_object(&event, "tool_input")["content"], json!("hi"));
        assert!(get_object(&event, "absent").is_empty());
    }
    assert_eq!(event, before);
}

#[test]
fn test_lenient_accessors_tolerate_wrong_types() {
    let event = raw(json!({"count": 3, "flag": "yes", "obj": []}));

    assert_eq!(get_str(&event, "count", "d"), "d");
    assert!(!get_bool(&event, "flag", false));
    assert!(get_object(&event, "obj").is_empty());
}

#[test]
fn test_require_fields_reports_all_missing_in_order() {
    let event = raw(json!({"b": 1, "d": null}));
    let err = require_fields(&event, &["a", "b", "c", "d"], Some(HookEventKind::Notification))
        .unwrap_err();

    assert_eq!(err.fields(), vec!["a", "c", "d"]);
    assert_eq!(
        err.to_string(),
        "Missing required Notification fields: a, c, d"
    );
}

#[test]
fn test_require_str_rejects_other_types() {
    let event = raw(json!({"prompt": 42}));
    let err = require_str(&event, "prompt", None).unwrap_err();

    assert_eq!(err.fields(), vec!["prompt"]);
    assert!(err.to_string().starts_with("Invalid hook field prompt"));
}
