//! Tests for the JSON each structured action writes.

use cchooks::prelude::*;
use serde_json::{json, Value};

use super::{minimal_payloads, raw};

type Sink<'a> = Emitter<&'a mut Vec<u8>, &'a mut Vec<u8>>;

fn respond(action: impl FnOnce(Sink<'_>) -> Exit) -> Value {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let exit = action(Emitter::new(&mut out, &mut err));

    assert_eq!(exit, Exit::SUCCESS);
    assert!(err.is_empty());
    let text = String::from_utf8(out).unwrap();
    assert!(text.ends_with('\n'));
    assert_eq!(text.lines().count(), 1);
    serde_json::from_str(&text).unwrap()
}

/// Every structured action available for the context, as emitted JSON.
fn all_responses(ctx: &HookContext) -> Vec<Value> {
    match ctx {
        HookContext::PreToolUse(c) => vec![
            respond(|e| c.output(e).allow("ok", false)),
            respond(|e| c.output(e).deny("no", false)),
            respond(|e| c.output(e).ask("sure?", false)),
            respond(|e| c.output(e).allow_with_input(json!({"file_path": "/tmp/b"}), "moved", false)),
            respond(|e| c.output(e).halt("stop", false)),
        ],
        HookContext::PostToolUse(c) => vec![
            respond(|e| c.output(e).accept(None, false)),
            respond(|e| c.output(e).accept(Some("formatted"), false)),
            respond(|e| c.output(e).challenge("lint failed", false)),
            respond(|e| c.output(e).halt("stop", false)),
        ],
        HookContext::Notification(c) => vec![
            respond(|e| c.output(e).acknowledge(None, false)),
            respond(|e| c.output(e).acknowledge(Some("seen"), true)),
            respond(|e| c.output(e).halt("stop", false)),
        ],
        HookContext::UserPromptSubmit(c) => vec![
            respond(|e| c.output(e).allow(false)),
            respond(|e| c.output(e).block("nope", false)),
            respond(|e| c.output(e).add_context("extra", false)),
            respond(|e| c.output(e).halt("stop", false)),
        ],
        HookContext::Stop(c) => vec![
            respond(|e| c.output(e).allow(false)),
            respond(|e| c.output(e).prevent("more", false)),
            respond(|e| c.output(e).halt("stop", false)),
        ],
        HookContext::SubagentStop(c) => vec![
            respond(|e| c.output(e).allow(false)),
            respond(|e| c.output(e).prevent("more", false)),
            respond(|e| c.output(e).halt("stop", false)),
        ],
        HookContext::PreCompact(c) => vec![
            respond(|e| c.output(e).acknowledge(Some("compacting"), false)),
            respond(|e| c.output(e).halt("stop", false)),
        ],
    }
}

#[test]
fn test_hook_event_name_matches_kind() {
    for payload in minimal_payloads() {
        let ctx = classify(raw(payload)).unwrap();
        for value in all_responses(&ctx) {
            assert_eq!(
                value["hookSpecificOutput"]["hookEventName"],
                json!(ctx.kind().as_str()),
                "{value}"
            );
            assert!(value["continue"].is_boolean());
            assert!(value["suppressOutput"].is_boolean());
        }
    }
}

#[test]
fn test_optional_fields_are_omitted_not_null() {
    for payload in minimal_payloads() {
        let ctx = classify(raw(payload)).unwrap();
        for value in all_responses(&ctx) {
            let text = value.to_string();
            assert!(!text.contains("null"), "{text}");
        }
    }
}

#[test]
fn test_ask_and_allow_with_input() {
    let ctx = classify(raw(minimal_payloads().remove(0))).unwrap();
    let HookContext::PreToolUse(c) = ctx else {
        panic!("expected PreToolUse");
    };

    let asked = respond(|e| c.output(e).ask("Confirm write to /tmp/a.txt", false));
    assert_eq!(asked["hookSpecificOutput"]["permissionDecision"], json!("ask"));

    let rewritten = respond(|e| {
        c.output(e)
            .allow_with_input(json!({"file_path": "/tmp/safe.txt", "content": "hi"}), "redirected", false)
    });
    assert_eq!(rewritten["hookSpecificOutput"]["permissionDecision"], json!("allow"));
    assert_eq!(
        rewritten["hookSpecificOutput"]["updatedInput"]["file_path"],
        json!("/tmp/safe.txt")
    );
}

#[test]
fn test_system_message_attaches_to_any_action() {
    let ctx = classify(raw(minimal_payloads().remove(3))).unwrap();
    let HookContext::UserPromptSubmit(c) = ctx else {
        panic!("expected UserPromptSubmit");
    };

    let value = respond(|e| {
        c.output(e)
            .with_system_message("Prompt logged")
            .add_context("Project uses Rust", true)
    });
    assert_eq!(value["systemMessage"], json!("Prompt logged"));
    assert_eq!(value["suppressOutput"], json!(true));
}

#[test]
fn test_post_tool_use_ignore_writes_nothing() {
    let ctx = classify(raw(minimal_payloads().remove(1))).unwrap();
    let HookContext::PostToolUse(c) = ctx else {
        panic!("expected PostToolUse");
    };

    let mut out = Vec::new();
    let mut err = Vec::new();
    let exit = c.output(Emitter::new(&mut out, &mut err)).ignore();

    assert_eq!(exit, Exit::SUCCESS);
    assert!(out.is_empty());
    assert!(err.is_empty());
}
