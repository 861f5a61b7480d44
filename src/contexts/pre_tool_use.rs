//! `PreToolUse` context and response builder.

use std::io::{self, Write};

use serde_json::Value;

use super::base::{impl_hook_output, CommonFields, EventContext, OutputBase};
use crate::error::ValidationError;
use crate::event::{HookEventKind, ToolName};
use crate::exit::{Emitter, Exit};
use crate::fields::{self, RawEvent};
use crate::response::{HookResponse, HookSpecificOutput, PermissionDecision};

const KIND: HookEventKind = HookEventKind::PreToolUse;

/// A tool call Claude is about to make.
#[derive(Debug, Clone, PartialEq)]
pub struct PreToolUseContext {
    common: CommonFields,
    tool_name: String,
    tool_input: RawEvent,
}

impl PreToolUseContext {
    /// Validate and project a raw event.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if a common field, `tool_name` or
    /// `tool_input` is missing, or `tool_input` is not an object.
    pub fn from_raw(raw: &RawEvent) -> Result<Self, ValidationError> {
        let common = CommonFields::validate(raw, KIND)?;
        Ok(Self {
            common,
            tool_name: fields::require_str(raw, "tool_name", Some(KIND))?,
            tool_input: fields::require_object(raw, "tool_input", Some(KIND))?,
        })
    }

    /// The tool name exactly as sent.
    #[must_use]
    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    /// The tool name matched against the known catalogue.
    #[must_use]
    pub fn tool(&self) -> ToolName {
        ToolName::from(self.tool_name.as_str())
    }

    #[must_use]
    pub fn tool_input(&self) -> &RawEvent {
        &self.tool_input
    }

    /// `file_path` (or `notebook_path`) from the tool input, if any.
    #[must_use]
    pub fn file_path(&self) -> Option<&str> {
        file_path(&self.tool_input)
    }

    /// `command` from the tool input, for `Bash` calls.
    #[must_use]
    pub fn command(&self) -> Option<&str> {
        self.tool_input.get("command").and_then(Value::as_str)
    }

    /// A builder that answers this event on `emitter`.
    pub fn output<O: Write, E: Write>(&self, emitter: Emitter<O, E>) -> PreToolUseOutput<O, E> {
        PreToolUseOutput::new(emitter)
    }

    /// A builder that answers this event on the process's standard streams.
    #[must_use]
    pub fn stdio_output(&self) -> PreToolUseOutput {
        self.output(Emitter::stdio())
    }
}

impl EventContext for PreToolUseContext {
    fn common(&self) -> &CommonFields {
        &self.common
    }
}

pub(crate) fn file_path(tool_input: &RawEvent) -> Option<&str> {
    tool_input
        .get("file_path")
        .or_else(|| tool_input.get("notebook_path"))
        .and_then(Value::as_str)
}

/// Responses legal for a `PreToolUse` event.
#[derive(Debug)]
pub struct PreToolUseOutput<O = io::Stdout, E = io::Stderr> {
    base: OutputBase<O, E>,
}

impl<O: Write, E: Write> PreToolUseOutput<O, E> {
    pub fn new(emitter: Emitter<O, E>) -> Self {
        Self {
            base: OutputBase::new(emitter),
        }
    }

    /// Let the tool run, bypassing the permission prompt.
    ///
    /// `reason` is shown to the user, not to Claude.
    pub fn allow(self, reason: impl Into<String>, suppress_output: bool) -> Exit {
        self.decide(PermissionDecision::Allow, reason.into(), None, suppress_output)
    }

    /// Let the tool run with `updated_input` replacing the original input.
    pub fn allow_with_input(
        self,
        updated_input: Value,
        reason: impl Into<String>,
        suppress_output: bool,
    ) -> Exit {
        self.decide(
            PermissionDecision::Allow,
            reason.into(),
            Some(updated_input),
            suppress_output,
        )
    }

    /// Prevent the tool call; `reason` is fed back to Claude.
    pub fn deny(self, reason: impl Into<String>, suppress_output: bool) -> Exit {
        self.decide(PermissionDecision::Deny, reason.into(), None, suppress_output)
    }

    /// Ask the user to confirm the tool call; `reason` is shown to the user.
    pub fn ask(self, reason: impl Into<String>, suppress_output: bool) -> Exit {
        self.decide(PermissionDecision::Ask, reason.into(), None, suppress_output)
    }

    fn decide(
        self,
        decision: PermissionDecision,
        reason: String,
        updated_input: Option<Value>,
        suppress_output: bool,
    ) -> Exit {
        debug_assert!(!reason.is_empty(), "permission decisions require a reason");
        self.base.respond(HookResponse::proceed(
            HookSpecificOutput::permission(decision, reason, updated_input),
            suppress_output,
        ))
    }
}

impl_hook_output!(PreToolUseOutput, HookEventKind::PreToolUse);
