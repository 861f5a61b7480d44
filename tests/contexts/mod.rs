//! Classification and response tests, grouped by concern.

mod accessors_test;
mod classify_test;
mod responses_test;

use serde_json::{json, Value};

pub const SESSION: &str = "sess_abc123def456";
pub const TRANSCRIPT: &str = "/Users/user/.claude/transcript_20240716_143022.json";

/// One minimal valid payload per event kind.
pub fn minimal_payloads() -> Vec<Value> {
    let common = |name: &str, extra: Value| {
        let mut value = json!({
            "hook_event_name": name,
            "session_id": SESSION,
            "transcript_path": TRANSCRIPT,
        });
        if let (Some(all), Value::Object(extra)) = (value.as_object_mut(), extra) {
            all.extend(extra);
        }
        value
    };

    vec![
        common(
            "PreToolUse",
            json!({"tool_name": "Write", "tool_input": {"file_path": "/tmp/a.txt", "content": "hi"}}),
        ),
        common(
            "PostToolUse",
            json!({
                "tool_name": "Write",
                "tool_input": {"file_path": "/tmp/a.txt"},
                "tool_response": {"success": true}
            }),
        ),
        common("Notification", json!({"message": "Permission required"})),
        common("UserPromptSubmit", json!({"prompt": "Please help me write a function"})),
        common("Stop", json!({"stop_hook_active": true})),
        common("SubagentStop", json!({"stop_hook_active": false})),
        common("PreCompact", json!({"trigger": "manual"})),
    ]
}

pub fn raw(value: Value) -> cchooks::fields::RawEvent {
    match value {
        Value::Object(map) => map,
        other => panic!("fixture is not an object: {other}"),
    }
}
