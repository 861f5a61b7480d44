//! `Stop` context and response builder.

use std::io::{self, Write};

use super::base::{impl_hook_output, CommonFields, EventContext, OutputBase};
use crate::error::ValidationError;
use crate::event::HookEventKind;
use crate::exit::{Emitter, Exit};
use crate::fields::{self, RawEvent};
use crate::response::{HookResponse, HookSpecificOutput};

const KIND: HookEventKind = HookEventKind::Stop;

/// Claude has finished responding and is about to stop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopContext {
    common: CommonFields,
    stop_hook_active: bool,
}

impl StopContext {
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

    /// `true` when Claude is already continuing because a stop hook
    /// prevented an earlier stop. Hooks should check it to avoid looping.
    #[must_use]
    pub fn stop_hook_active(&self) -> bool {
        self.stop_hook_active
    }

    pub fn output<O: Write, E: Write>(&self, emitter: Emitter<O, E>) -> StopOutput<O, E> {
        StopOutput::new(emitter)
    }

    #[must_use]
    pub fn stdio_output(&self) -> StopOutput {
        self.output(Emitter::stdio())
    }
}

impl EventContext for StopContext {
    fn common(&self) -> &CommonFields {
        &self.common
    }
}

/// Responses legal for a `Stop` event.
#[derive(Debug)]
pub struct StopOutput<O = io::Stdout, E = io::Stderr> {
    base: OutputBase<O, E>,
}

impl<O: Write, E: Write> StopOutput<O, E> {
    pub fn new(emitter: Emitter<O, E>) -> Self {
        Self {
            base: OutputBase::new(emitter),
        }
    }

    /// Let Claude stop.
    pub fn allow(self, suppress_output: bool) -> Exit {
        self.base.respond(HookResponse::proceed(
            HookSpecificOutput::empty(KIND),
            suppress_output,
        ))
    }

    /// Keep Claude working; `reason` tells Claude how to proceed.
    pub fn prevent(self, reason: impl Into<String>, suppress_output: bool) -> Exit {
        let reason = reason.into();
        debug_assert!(!reason.is_empty(), "prevent requires a reason");
        self.base
            .respond(HookResponse::block(KIND, reason, suppress_output))
    }
}

impl_hook_output!(StopOutput, HookEventKind::Stop);
