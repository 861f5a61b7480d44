//! `UserPromptSubmit` context and response builder.

use std::io::{self, Write};

use super::base::{impl_hook_output, CommonFields, EventContext, OutputBase};
use crate::error::ValidationError;
use crate::event::HookEventKind;
use crate::exit::{Emitter, Exit};
use crate::fields::{self, RawEvent};
use crate::response::{HookResponse, HookSpecificOutput};

const KIND: HookEventKind = HookEventKind::UserPromptSubmit;

/// A prompt the user just submitted, before Claude sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserPromptSubmitContext {
    common: CommonFields,
    prompt: String,
}

impl UserPromptSubmitContext {
    /// Validate and project a raw event.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if a common field or `prompt` is
    /// missing, or `prompt` is not a string.
    pub fn from_raw(raw: &RawEvent) -> Result<Self, ValidationError> {
        let common = CommonFields::validate(raw, KIND)?;
        Ok(Self {
            common,
            prompt: fields::require_str(raw, "prompt", Some(KIND))?,
        })
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn output<O: Write, E: Write>(
        &self,
        emitter: Emitter<O, E>,
    ) -> UserPromptSubmitOutput<O, E> {
        UserPromptSubmitOutput::new(emitter)
    }

    #[must_use]
    pub fn stdio_output(&self) -> UserPromptSubmitOutput {
        self.output(Emitter::stdio())
    }
}

impl EventContext for UserPromptSubmitContext {
    fn common(&self) -> &CommonFields {
        &self.common
    }
}

/// Responses legal for a `UserPromptSubmit` event.
#[derive(Debug)]
pub struct UserPromptSubmitOutput<O = io::Stdout, E = io::Stderr> {
    base: OutputBase<O, E>,
}

impl<O: Write, E: Write> UserPromptSubmitOutput<O, E> {
    pub fn new(emitter: Emitter<O, E>) -> Self {
        Self {
            base: OutputBase::new(emitter),
        }
    }

    /// Let the prompt through unchanged.
    pub fn allow(self, suppress_output: bool) -> Exit {
        self.base.respond(HookResponse::proceed(
            HookSpecificOutput::empty(KIND),
            suppress_output,
        ))
    }

    /// Reject the prompt. It is erased from context and `reason` is shown to
    /// the user.
    pub fn block(self, reason: impl Into<String>, suppress_output: bool) -> Exit {
        let reason = reason.into();
        debug_assert!(!reason.is_empty(), "block requires a reason");
        self.base
            .respond(HookResponse::block(KIND, reason, suppress_output))
    }

    /// Let the prompt through with `context` added for Claude.
    pub fn add_context(self, context: impl Into<String>, suppress_output: bool) -> Exit {
        self.base.respond(HookResponse::proceed(
            HookSpecificOutput::UserPromptSubmit {
                additional_context: Some(context.into()),
            },
            suppress_output,
        ))
    }
}

impl_hook_output!(UserPromptSubmitOutput, HookEventKind::UserPromptSubmit);
