//! JSON response payloads understood by Claude Code.
//!
//! Every structured response is a [`HookResponse`]: a common envelope
//! (`continue`, `stopReason`, `suppressOutput`, `systemMessage`, and the
//! top-level `decision`/`reason` pair some events use) plus a
//! `hookSpecificOutput` object tagged with the originating event name.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::event::HookEventKind;

/// Decision for a `PreToolUse` hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionDecision {
    Allow,
    Deny,
    Ask,
}

/// Top-level `decision` value. The host only defines `"block"`; leaving the
/// field out means "no objection".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Block,
}

/// The `hookSpecificOutput` object, tagged by `hookEventName`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "hookEventName")]
pub enum HookSpecificOutput {
    #[serde(rename_all = "camelCase")]
    PreToolUse {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        permission_decision: Option<PermissionDecision>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        permission_decision_reason: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        updated_input: Option<Value>,
    },
    #[serde(rename_all = "camelCase")]
    PostToolUse {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        additional_context: Option<String>,
    },
    Notification,
    #[serde(rename_all = "camelCase")]
    UserPromptSubmit {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        additional_context: Option<String>,
    },
    Stop,
    SubagentStop,
    PreCompact,
}

impl HookSpecificOutput {
    /// The object for `kind` with no decision fields set.
    #[must_use]
    pub fn empty(kind: HookEventKind) -> Self {
        match kind {
            HookEventKind::PreToolUse => Self::PreToolUse {
                permission_decision: None,
                permission_decision_reason: None,
                updated_input: None,
            },
            HookEventKind::PostToolUse => Self::PostToolUse {
                additional_context: None,
            },
            HookEventKind::Notification => Self::Notification,
            HookEventKind::UserPromptSubmit => Self::UserPromptSubmit {
                additional_context: None,
            },
            HookEventKind::Stop => Self::Stop,
            HookEventKind::SubagentStop => Self::SubagentStop,
            HookEventKind::PreCompact => Self::PreCompact,
        }
    }

    /// A `PreToolUse` permission decision.
    #[must_use]
    pub fn permission(
        decision: PermissionDecision,
        reason: impl Into<String>,
        updated_input: Option<Value>,
    ) -> Self {
        Self::PreToolUse {
            permission_decision: Some(decision),
            permission_decision_reason: Some(reason.into()),
            updated_input,
        }
    }

    /// The event this object answers.
    #[must_use]
    pub fn kind(&self) -> HookEventKind {
        match self {
            Self::PreToolUse { .. } => HookEventKind::PreToolUse,
            Self::PostToolUse { .. } => HookEventKind::PostToolUse,
            Self::Notification => HookEventKind::Notification,
            Self::UserPromptSubmit { .. } => HookEventKind::UserPromptSubmit,
            Self::Stop => HookEventKind::Stop,
            Self::SubagentStop => HookEventKind::SubagentStop,
            Self::PreCompact => HookEventKind::PreCompact,
        }
    }
}

/// A complete structured hook response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HookResponse {
    /// `false` asks Claude Code to stop all further processing.
    #[serde(rename = "continue")]
    pub continue_processing: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_reason: Option<String>,
    /// Hide this hook's stdout from transcript mode.
    #[serde(default)]
    pub suppress_output: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decision: Option<Decision>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub hook_specific_output: HookSpecificOutput,
}

impl HookResponse {
    /// Let processing continue, carrying `specific` for the host.
    #[must_use]
    pub fn proceed(specific: HookSpecificOutput, suppress_output: bool) -> Self {
        Self {
            continue_processing: true,
            stop_reason: None,
            suppress_output,
            system_message: None,
            decision: None,
            reason: None,
            hook_specific_output: specific,
        }
    }

    /// Stop all processing; `stop_reason` is shown to the user, not Claude.
    #[must_use]
    pub fn halt(kind: HookEventKind, stop_reason: impl Into<String>, suppress_output: bool) -> Self {
        Self {
            continue_processing: false,
            stop_reason: Some(stop_reason.into()),
            ..Self::proceed(HookSpecificOutput::empty(kind), suppress_output)
        }
    }

    /// Continue, but block this step with `reason` fed back to Claude.
    #[must_use]
    pub fn block(kind: HookEventKind, reason: impl Into<String>, suppress_output: bool) -> Self {
        Self {
            decision: Some(Decision::Block),
            reason: Some(reason.into()),
            ..Self::proceed(HookSpecificOutput::empty(kind), suppress_output)
        }
    }

    #[must_use]
    pub fn with_system_message(mut self, message: Option<String>) -> Self {
        if message.is_some() {
            self.system_message = message;
        }
        self
    }

    /// The event this response answers.
    #[must_use]
    pub fn kind(&self) -> HookEventKind {
        self.hook_specific_output.kind()
    }
}
