//! Typed views of hook events.
//!
//! [`classify`] turns a raw JSON object into exactly one [`HookContext`]
//! variant, validating the discriminator before any kind-specific field.

mod base;
mod notification;
mod post_tool_use;
mod pre_compact;
mod pre_tool_use;
mod stop;
mod subagent_stop;
mod user_prompt_submit;

use std::io::Read;

use serde_json::Value;

pub use base::{CommonFields, EventContext, HookOutput, OutputBase, COMMON_FIELDS};
pub use notification::{NotificationContext, NotificationOutput};
pub use post_tool_use::{PostToolUseContext, PostToolUseOutput};
pub use pre_compact::{PreCompactContext, PreCompactOutput};
pub use pre_tool_use::{PreToolUseContext, PreToolUseOutput};
pub use stop::{StopContext, StopOutput};
pub use subagent_stop::{SubagentStopContext, SubagentStopOutput};
pub use user_prompt_submit::{UserPromptSubmitContext, UserPromptSubmitOutput};

use crate::error::{HookError, ValidationError};
use crate::event::HookEventKind;
use crate::fields::RawEvent;
use crate::input;

/// A classified hook event.
#[derive(Debug, Clone, PartialEq)]
pub enum HookContext {
    PreToolUse(PreToolUseContext),
    PostToolUse(PostToolUseContext),
    Notification(NotificationContext),
    UserPromptSubmit(UserPromptSubmitContext),
    Stop(StopContext),
    SubagentStop(SubagentStopContext),
    PreCompact(PreCompactContext),
}

impl HookContext {
    fn inner(&self) -> &dyn EventContext {
        match self {
            Self::PreToolUse(ctx) => ctx,
            Self::PostToolUse(ctx) => ctx,
            Self::Notification(ctx) => ctx,
            Self::UserPromptSubmit(ctx) => ctx,
            Self::Stop(ctx) => ctx,
            Self::SubagentStop(ctx) => ctx,
            Self::PreCompact(ctx) => ctx,
        }
    }
}

impl EventContext for HookContext {
    fn common(&self) -> &CommonFields {
        self.inner().common()
    }
}

/// Classify a parsed event object.
///
/// # Errors
///
/// - [`HookError::Validation`] if `hook_event_name` is absent or `null`, or
///   if the kind's required fields are missing or mistyped.
/// - [`HookError::InvalidHookType`] if `hook_event_name` is not a string
///   naming one of the seven known kinds.
pub fn classify(raw: RawEvent) -> Result<HookContext, HookError> {
    let kind = discriminator(&raw)?;

    let context = match kind {
        HookEventKind::PreToolUse => HookContext::PreToolUse(PreToolUseContext::from_raw(&raw)?),
        HookEventKind::PostToolUse => {
            HookContext::PostToolUse(PostToolUseContext::from_raw(&raw)?)
        }
        HookEventKind::Notification => {
            HookContext::Notification(NotificationContext::from_raw(&raw)?)
        }
        HookEventKind::UserPromptSubmit => {
            HookContext::UserPromptSubmit(UserPromptSubmitContext::from_raw(&raw)?)
        }
        HookEventKind::Stop => HookContext::Stop(StopContext::from_raw(&raw)?),
        HookEventKind::SubagentStop => {
            HookContext::SubagentStop(SubagentStopContext::from_raw(&raw)?)
        }
        HookEventKind::PreCompact => HookContext::PreCompact(PreCompactContext::from_raw(&raw)?),
    };

    tracing::debug!(
        kind = %context.kind(),
        session = %context.session_id(),
        "Classified hook event"
    );
    Ok(context)
}

/// Read one event from `reader` and classify it.
///
/// # Errors
///
/// Any [`HookError`]: parse failures from reading, then classification
/// failures as in [`classify`].
pub fn create_context<R: Read>(reader: R) -> Result<HookContext, HookError> {
    classify(input::read_raw_event(reader)?)
}

fn discriminator(raw: &RawEvent) -> Result<HookEventKind, HookError> {
    match raw.get("hook_event_name") {
        None | Some(Value::Null) => Err(ValidationError::MissingFields {
            kind: None,
            fields: vec!["hook_event_name".to_string()],
        }
        .into()),
        Some(Value::String(name)) => HookEventKind::from_name(name)
            .ok_or_else(|| HookError::InvalidHookType(name.clone())),
        Some(other) => Err(HookError::InvalidHookType(other.to_string())),
    }
}
