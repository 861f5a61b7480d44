//! `PreCompact` context and response builder.

use std::io::{self, Write};

use super::base::{impl_hook_output, CommonFields, EventContext, OutputBase};
use crate::error::ValidationError;
use crate::event::{CompactTrigger, HookEventKind};
use crate::exit::{Emitter, Exit};
use crate::fields::{self, RawEvent};
use crate::response::{HookResponse, HookSpecificOutput};

const KIND: HookEventKind = HookEventKind::PreCompact;

/// Claude Code is about to compact the transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreCompactContext {
    common: CommonFields,
    trigger: CompactTrigger,
    custom_instructions: String,
}

impl PreCompactContext {
    /// Validate and project a raw event.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if a common field or `trigger` is
    /// missing, or `trigger` is not a string. Unrecognised trigger names are
    /// accepted as [`CompactTrigger::Other`].
    pub fn from_raw(raw: &RawEvent) -> Result<Self, ValidationError> {
        let common = CommonFields::validate(raw, KIND)?;
        Ok(Self {
            common,
            trigger: fields::require_str(raw, "trigger", Some(KIND))?.into(),
            custom_instructions: fields::get_str(raw, "custom_instructions", ""),
        })
    }

    #[must_use]
    pub fn trigger(&self) -> &CompactTrigger {
        &self.trigger
    }

    /// Instructions passed to `/compact`; empty for automatic compaction.
    #[must_use]
    pub fn custom_instructions(&self) -> &str {
        &self.custom_instructions
    }

    pub fn output<O: Write, E: Write>(&self, emitter: Emitter<O, E>) -> PreCompactOutput<O, E> {
        PreCompactOutput::new(emitter)
    }

    #[must_use]
    pub fn stdio_output(&self) -> PreCompactOutput {
        self.output(Emitter::stdio())
    }
}

impl EventContext for PreCompactContext {
    fn common(&self) -> &CommonFields {
        &self.common
    }
}

/// Responses legal for a `PreCompact` event.
///
/// Like notifications, compaction cannot be vetoed through JSON; the hook
/// can only report.
#[derive(Debug)]
pub struct PreCompactOutput<O = io::Stdout, E = io::Stderr> {
    base: OutputBase<O, E>,
}

impl<O: Write, E: Write> PreCompactOutput<O, E> {
    pub fn new(emitter: Emitter<O, E>) -> Self {
        Self {
            base: OutputBase::new(emitter),
        }
    }

    /// Let compaction proceed, optionally showing `message` to the user.
    pub fn acknowledge(self, message: Option<&str>, suppress_output: bool) -> Exit {
        self.base.respond(
            HookResponse::proceed(HookSpecificOutput::PreCompact, suppress_output)
                .with_system_message(message.map(String::from)),
        )
    }
}

impl_hook_output!(PreCompactOutput, HookEventKind::PreCompact);
