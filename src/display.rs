//! Human-readable rendering of classified events for `cchooks inspect`.
//!
//! Everything here writes to a caller-supplied stream; the CLI passes
//! stderr so stdout stays free for hook responses.

use std::io::{self, Write};

use owo_colors::{OwoColorize, Style};
use serde_json::{json, Value};

use crate::contexts::{EventContext, HookContext};
use crate::event::HookEventKind;
use crate::fields::RawEvent;

/// Maximum length for truncated display strings.
const DEFAULT_MAX_LEN: usize = 80;

/// Truncate to at most `max_len` characters, ending in `...` when cut.
#[must_use]
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".to_string()
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{kept}...")
    }
}

/// Format tool input as `key=value` pairs, truncating long values.
#[must_use]
pub fn format_tool_input(input: &RawEvent) -> String {
    input
        .iter()
        .map(|(k, v)| {
            let value = match v {
                Value::String(s) => truncate(s, 50),
                other => truncate(&other.to_string(), 50),
            };
            format!("{k}={value}")
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn tag_style(kind: HookEventKind) -> Style {
    let style = Style::new().bold();
    match kind {
        HookEventKind::PreToolUse | HookEventKind::PostToolUse => style.cyan(),
        HookEventKind::UserPromptSubmit => style.magenta(),
        HookEventKind::Stop | HookEventKind::SubagentStop => style.yellow(),
        HookEventKind::Notification | HookEventKind::PreCompact => style.blue(),
    }
}

fn paint(text: &str, style: Style, colored: bool) -> String {
    if colored {
        text.style(style).to_string()
    } else {
        text.to_string()
    }
}

/// The kind-specific line of a summary, uncoloured.
#[must_use]
pub fn event_detail(ctx: &HookContext) -> String {
    match ctx {
        HookContext::PreToolUse(c) => {
            format!("{} ({})", c.tool_name(), format_tool_input(c.tool_input()))
        }
        HookContext::PostToolUse(c) => format!(
            "{} {} ({})",
            c.tool_name(),
            if c.succeeded() { "ok" } else { "failed" },
            format_tool_input(c.tool_input())
        ),
        HookContext::Notification(c) => truncate(c.message(), DEFAULT_MAX_LEN),
        HookContext::UserPromptSubmit(c) => truncate(c.prompt(), DEFAULT_MAX_LEN),
        HookContext::Stop(c) => format!("stop_hook_active={}", c.stop_hook_active()),
        HookContext::SubagentStop(c) => format!("stop_hook_active={}", c.stop_hook_active()),
        HookContext::PreCompact(c) if c.custom_instructions().is_empty() => {
            format!("trigger={}", c.trigger())
        }
        HookContext::PreCompact(c) => format!(
            "trigger={} instructions={}",
            c.trigger(),
            truncate(c.custom_instructions(), 50)
        ),
    }
}

/// Write a two-line summary of `ctx`.
///
/// # Errors
///
/// Returns any error from writing to `w`.
pub fn write_event_summary<W: Write>(w: &mut W, ctx: &HookContext, colored: bool) -> io::Result<()> {
    let kind = ctx.kind();
    let tag = format!("[{kind}]");
    let mut session = format!("session={}", truncate(ctx.session_id(), 20));
    if !ctx.cwd().is_empty() {
        session.push_str(&format!(" cwd={}", ctx.cwd()));
    }
    if let Some(mode) = ctx.permission_mode() {
        session.push_str(&format!(" mode={mode}"));
    }

    writeln!(
        w,
        "{} {}",
        paint(&tag, tag_style(kind), colored),
        paint(&session, Style::new().dimmed(), colored)
    )?;
    writeln!(w, "  {}", event_detail(ctx))?;
    w.flush()
}

/// The classified view as JSON, with optional fields filled in.
#[must_use]
pub fn context_json(ctx: &HookContext) -> Value {
    let mut value = json!({
        "hook_event_name": ctx.kind().as_str(),
        "session_id": ctx.session_id(),
        "transcript_path": ctx.transcript_path(),
        "cwd": ctx.cwd(),
        "permission_mode": ctx.permission_mode(),
    });
    let specific = match ctx {
        HookContext::PreToolUse(c) => json!({
            "tool_name": c.tool_name(),
            "tool_input": c.tool_input(),
        }),
        HookContext::PostToolUse(c) => json!({
            "tool_name": c.tool_name(),
            "tool_input": c.tool_input(),
            "tool_response": c.tool_response(),
        }),
        HookContext::Notification(c) => json!({ "message": c.message() }),
        HookContext::UserPromptSubmit(c) => json!({ "prompt": c.prompt() }),
        HookContext::Stop(c) => json!({ "stop_hook_active": c.stop_hook_active() }),
        HookContext::SubagentStop(c) => json!({ "stop_hook_active": c.stop_hook_active() }),
        HookContext::PreCompact(c) => json!({
            "trigger": c.trigger(),
            "custom_instructions": c.custom_instructions(),
        }),
    };
    if let (Value::Object(all), Value::Object(extra)) = (&mut value, specific) {
        all.extend(extra);
    }
    value
}
