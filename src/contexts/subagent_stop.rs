//! `SubagentStop` context and response builder.

use std::io::{self, Write};

use super::base::{impl_hook_output, CommonFields, EventContext, OutputBase};
use crate::error::ValidationError;
use crate::event::HookEventKind;
use crate::exit::{Emitter, Exit};
use crate::fields::{self, RawEvent};
use crate::response::{HookResponse, HookSpecificOutput};

const KIND: HookEventKind = HookEventKind::SubagentStop;

/// A subagent (Task tool call) has finished and is about to stop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubagentStopContext {
    common: CommonFields,
    stop_hook_active: bool,
}

impl SubagentStopContext {
    /// Validate and project a raw event.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if a common field or
    /// `stop_hook_active` is missing, or the latter is not a boolean.
    pub fn from_raw(raw: &RawEvent) -> Result<Self, ValidationError> {
        let common = CommonFields::validate(raw, KIND)?;
        Ok(Self {
            common,
            stop_hook_active: fields::require_bool(raw, "stop_hook_active", Some(KIND))?,
        })
    }

    /// See [`StopContext::stop_hook_active`](super::StopContext::stop_hook_active).
    #[must_use]
    pub fn stop_hook_active(&self) -> bool {
        self.stop_hook_active
    }

    pub fn output<O: Write, E: Write>(&self, emitter: Emitter<O, E>) -> SubagentStopOutput<O, E> {
        SubagentStopOutput::new(emitter)
    }

    #[must_use]
    pub fn stdio_output(&self) -> SubagentStopOutput {
        self.output(Emitter::stdio())
    }
}

impl EventContext for SubagentStopContext {
    fn common(&self) -> &CommonFields {
        &self.common
    }
}

/// Responses legal for a `SubagentStop` event.
#[derive(Debug)]
pub struct SubagentStopOutput<O = io::Stdout, E = io::Stderr> {
    base: OutputBase<O, E>,
}

impl<O: Write, E: Write> SubagentStopOutput<O, E> {
    pub fn new(emitter: Emitter<O, E>) -> Self {
        Self {
            base: OutputBase::new(emitter),
        }
    }

    /// Let the subagent stop.
    pub fn allow(self, suppress_output: bool) -> Exit {
        self.base.respond(HookResponse::proceed(
            HookSpecificOutput::empty(KIND),
            suppress_output,
        ))
    }

    /// Keep the subagent working; `reason` tells it how to proceed.
    pub fn prevent(self, reason: impl Into<String>, suppress_output: bool) -> Exit {
        let reason = reason.into();
        debug_assert!(!reason.is_empty(), "prevent requires a reason");
        self.base
            .respond(HookResponse::block(KIND, reason, suppress_output))
    }
}

impl_hook_output!(SubagentStopOutput, HookEventKind::SubagentStop);
