//! `Notification` context and response builder.

use std::io::{self, Write};

use super::base::{impl_hook_output, CommonFields, EventContext, OutputBase};
use crate::error::ValidationError;
use crate::event::HookEventKind;
use crate::exit::{Emitter, Exit};
use crate::fields::{self, RawEvent};
use crate::response::{HookResponse, HookSpecificOutput};

const KIND: HookEventKind = HookEventKind::Notification;

/// A notification Claude Code is about to show (permission requests, idle
/// prompts).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationContext {
    common: CommonFields,
    message: String,
}

impl NotificationContext {
    /// Validate and project a raw event.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if a common field or `message` is
    /// missing, or `message` is not a string.
    pub fn from_raw(raw: &RawEvent) -> Result<Self, ValidationError> {
        let common = CommonFields::validate(raw, KIND)?;
        Ok(Self {
            common,
            message: fields::require_str(raw, "message", Some(KIND))?,
        })
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn output<O: Write, E: Write>(&self, emitter: Emitter<O, E>) -> NotificationOutput<O, E> {
        NotificationOutput::new(emitter)
    }

    #[must_use]
    pub fn stdio_output(&self) -> NotificationOutput {
        self.output(Emitter::stdio())
    }
}

impl EventContext for NotificationContext {
    fn common(&self) -> &CommonFields {
        &self.common
    }
}

/// Responses legal for a `Notification` event.
///
/// Notifications carry no decision; the host only displays what the hook
/// says. `exit_block` and `exit_non_block` therefore differ only in exit
/// code, not in effect.
#[derive(Debug)]
pub struct NotificationOutput<O = io::Stdout, E = io::Stderr> {
    base: OutputBase<O, E>,
}

impl<O: Write, E: Write> NotificationOutput<O, E> {
    pub fn new(emitter: Emitter<O, E>) -> Self {
        Self {
            base: OutputBase::new(emitter),
        }
    }

    /// Acknowledge the notification, optionally showing `message` to the user.
    pub fn acknowledge(self, message: Option<&str>, suppress_output: bool) -> Exit {
        self.base.respond(
            HookResponse::proceed(HookSpecificOutput::Notification, suppress_output)
                .with_system_message(message.map(String::from)),
        )
    }
}

impl_hook_output!(NotificationOutput, HookEventKind::Notification);
