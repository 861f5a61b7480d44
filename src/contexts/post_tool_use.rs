//! `PostToolUse` context and response builder.

use std::io::{self, Write};

use serde_json::Value;

use super::base::{impl_hook_output, CommonFields, EventContext, OutputBase};
use super::pre_tool_use::file_path;
use crate::error::ValidationError;
use crate::event::{HookEventKind, ToolName};
use crate::exit::{Emitter, Exit};
use crate::fields::{self, RawEvent};
use crate::response::{HookResponse, HookSpecificOutput};

const KIND: HookEventKind = HookEventKind::PostToolUse;

/// A tool call that has just completed.
#[derive(Debug, Clone, PartialEq)]
pub struct PostToolUseContext {
    common: CommonFields,
    tool_name: String,
    tool_input: RawEvent,
    tool_response: RawEvent,
}

impl PostToolUseContext {
    /// Validate and project a raw event.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if a common field, `tool_name`,
    /// `tool_input` or `tool_response` is missing, or either of the latter
    /// is not an object.
    pub fn from_raw(raw: &RawEvent) -> Result<Self, ValidationError> {
        let common = CommonFields::validate(raw, KIND)?;
        Ok(Self {
            common,
            tool_name: fields::require_str(raw, "tool_name", Some(KIND))?,
            tool_input: fields::require_object(raw, "tool_input", Some(KIND))?,
            tool_response: fields::require_object(raw, "tool_response", Some(KIND))?,
        })
    }

    #[must_use]
    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    #[must_use]
    pub fn tool(&self) -> ToolName {
        ToolName::from(self.tool_name.as_str())
    }

    #[must_use]
    pub fn tool_input(&self) -> &RawEvent {
        &self.tool_input
    }

    #[must_use]
    pub fn tool_response(&self) -> &RawEvent {
        &self.tool_response
    }

    #[must_use]
    pub fn file_path(&self) -> Option<&str> {
        file_path(&self.tool_input)
    }

    /// `false` only when the tool reported `"success": false`.
    #[must_use]
    pub fn succeeded(&self) -> bool {
        fields::get_bool(&self.tool_response, "success", true)
    }

    /// The `error` string from the tool response, if any.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.tool_response.get("error").and_then(Value::as_str)
    }

    pub fn output<O: Write, E: Write>(&self, emitter: Emitter<O, E>) -> PostToolUseOutput<O, E> {
        PostToolUseOutput::new(emitter)
    }

    #[must_use]
    pub fn stdio_output(&self) -> PostToolUseOutput {
        self.output(Emitter::stdio())
    }
}

impl EventContext for PostToolUseContext {
    fn common(&self) -> &CommonFields {
        &self.common
    }
}

/// Responses legal for a `PostToolUse` event.
///
/// The tool has already run, so nothing here can undo it; `challenge` only
/// prompts Claude with feedback.
#[derive(Debug)]
pub struct PostToolUseOutput<O = io::Stdout, E = io::Stderr> {
    base: OutputBase<O, E>,
}

impl<O: Write, E: Write> PostToolUseOutput<O, E> {
    pub fn new(emitter: Emitter<O, E>) -> Self {
        Self {
            base: OutputBase::new(emitter),
        }
    }

    /// Accept the result, optionally giving Claude extra context about it.
    pub fn accept(self, additional_context: Option<&str>, suppress_output: bool) -> Exit {
        self.base.respond(HookResponse::proceed(
            HookSpecificOutput::PostToolUse {
                additional_context: additional_context.map(String::from),
            },
            suppress_output,
        ))
    }

    /// Push back on the result; `reason` is fed to Claude.
    pub fn challenge(self, reason: impl Into<String>, suppress_output: bool) -> Exit {
        let reason = reason.into();
        debug_assert!(!reason.is_empty(), "challenge requires a reason");
        self.base
            .respond(HookResponse::block(KIND, reason, suppress_output))
    }

    /// Leave the host's default handling untouched: write nothing, exit 0.
    pub fn ignore(self) -> Exit {
        self.base.silent()
    }
}

impl_hook_output!(PostToolUseOutput, HookEventKind::PostToolUse);
