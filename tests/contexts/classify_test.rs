//! Tests for turning raw input into typed contexts.

use cchooks::prelude::*;
use cchooks::ParseError;
use serde_json::json;

use super::{minimal_payloads, raw, SESSION, TRANSCRIPT};

#[test]
fn test_every_minimal_payload_classifies() {
    let payloads = minimal_payloads();
    assert_eq!(payloads.len(), HookEventKind::ALL.len());

    for (payload, kind) in payloads.into_iter().zip(HookEventKind::ALL) {
        let ctx = classify(raw(payload)).unwrap();
        assert_eq!(ctx.kind(), kind);
        assert_eq!(ctx.session_id(), SESSION);
        assert_eq!(ctx.transcript_path(), TRANSCRIPT);
        assert_eq!(ctx.cwd(), "");
    }
}

#[test]
fn test_required_properties_read_back() {
    let mut payloads = minimal_payloads().into_iter().map(|p| classify(raw(p)).unwrap());

    match payloads.next() {
        Some(HookContext::PreToolUse(c)) => {
            assert_eq!(c.tool_name(), "Write");
            assert_eq!(c.tool(), ToolName::Write);
            assert_eq!(c.tool_input()["content"], json!("hi"));
        }
        other => panic!("unexpected {other:?}"),
    }
    match payloads.next() {
        Some(HookContext::PostToolUse(c)) => {
            assert_eq!(c.tool_name(), "Write");
            assert_eq!(c.file_path(), Some("/tmp/a.txt"));
            assert_eq!(c.tool_response()["success"], json!(true));
            assert!(c.succeeded());
        }
        other => panic!("unexpected {other:?}"),
    }
    match payloads.next() {
        Some(HookContext::Notification(c)) => assert_eq!(c.message(), "Permission required"),
        other => panic!("unexpected {other:?}"),
    }
    match payloads.next() {
        Some(HookContext::UserPromptSubmit(c)) => {
            assert_eq!(c.prompt(), "Please help me write a function");
        }
        other => panic!("unexpected {other:?}"),
    }
    match payloads.next() {
        Some(HookContext::Stop(c)) => assert!(c.stop_hook_active()),
        other => panic!("unexpected {other:?}"),
    }
    match payloads.next() {
        Some(HookContext::SubagentStop(c)) => assert!(!c.stop_hook_active()),
        other => panic!("unexpected {other:?}"),
    }
    match payloads.next() {
        Some(HookContext::PreCompact(c)) => {
            assert_eq!(c.trigger(), &CompactTrigger::Manual);
            assert_eq!(c.custom_instructions(), "");
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn test_missing_discriminator_is_validation() {
    let err = classify(raw(json!({"session_id": SESSION, "transcript_path": TRANSCRIPT})))
        .unwrap_err();
    assert!(matches!(err, HookError::Validation(_)), "{err:?}");
}

#[test]
fn test_empty_object_is_validation() {
    let err = create_context(&b"{}"[..]).unwrap_err();
    assert!(matches!(err, HookError::Validation(_)), "{err:?}");
}

#[test]
fn test_unknown_discriminator_carries_name() {
    let err = classify(raw(json!({
        "hook_event_name": "UnknownHook",
        "session_id": SESSION,
        "transcript_path": TRANSCRIPT
    })))
    .unwrap_err();

    assert!(matches!(err, HookError::InvalidHookType(ref name) if name == "UnknownHook"));
    assert_eq!(err.to_string(), "Unknown hook event type: UnknownHook");
}

#[test]
fn test_each_kind_missing_one_required_field() {
    for (payload, kind) in minimal_payloads().into_iter().zip(HookEventKind::ALL) {
        for field in kind.required_fields() {
            let mut event = raw(payload.clone());
            event.remove(*field);

            match classify(event) {
                Err(HookError::Validation(e)) => {
                    assert_eq!(e.fields(), vec![*field], "{kind} without {field}");
                    assert_eq!(e.kind(), Some(kind));
                }
                other => panic!("{kind} without {field}: {other:?}"),
            }
        }
    }
}

#[test]
fn test_missing_session_id_named() {
    let mut event = raw(minimal_payloads().remove(0));
    event.remove("session_id");
    let err = classify(event).unwrap_err();

    assert_eq!(
        err.to_string(),
        "Invalid hook input: Missing required PreToolUse fields: session_id"
    );
}

#[test]
fn test_not_an_object_is_parse_error() {
    let err = create_context(&br#""not an object""#[..]).unwrap_err();
    assert!(matches!(err, HookError::Parse(ParseError::NotAnObject { found: "string" })));
}

#[test]
fn test_invalid_json_is_parse_error() {
    let err = create_context(&b"{not json"[..]).unwrap_err();
    assert!(matches!(err, HookError::Parse(ParseError::Json(_))));
    assert_eq!(err.category(), "parse");
}

#[test]
fn test_extra_fields_are_ignored() {
    let mut event = raw(minimal_payloads().remove(4));
    event.insert("future_field".to_string(), json!({"nested": [1, 2, 3]}));
    event.insert("permission_mode".to_string(), json!("acceptEdits"));

    let ctx = classify(event).unwrap();
    assert_eq!(ctx.kind(), HookEventKind::Stop);
    assert_eq!(ctx.permission_mode(), Some("acceptEdits"));
}

#[test]
fn test_post_tool_use_failure() {
    let ctx = classify(raw(json!({
        "hook_event_name": "PostToolUse",
        "session_id": SESSION,
        "transcript_path": TRANSCRIPT,
        "tool_name": "Write",
        "tool_input": {"file_path": "/etc/protected_file.txt"},
        "tool_response": {"success": false, "error": "Permission denied: /etc/protected_file.txt"}
    })))
    .unwrap();

    let HookContext::PostToolUse(ctx) = ctx else {
        panic!("expected PostToolUse");
    };
    assert!(!ctx.succeeded());
    assert_eq!(ctx.error_message(), Some("Permission denied: /etc/protected_file.txt"));
}
