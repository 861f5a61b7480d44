//! Pieces shared by every event context and response builder.

use std::io::Write;

use crate::error::ValidationError;
use crate::event::HookEventKind;
use crate::exit::{Emitter, Exit};
use crate::fields::{self, RawEvent};
use crate::response::HookResponse;

/// Keys every hook event carries.
pub const COMMON_FIELDS: [&str; 3] = ["session_id", "transcript_path", "hook_event_name"];

/// Fields present on every event, whatever its kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommonFields {
    pub session_id: String,
    pub transcript_path: String,
    pub hook_event_name: HookEventKind,
    /// Working directory of the Claude Code session; empty when not sent.
    pub cwd: String,
    /// Permission mode (e.g. `default`, `acceptEdits`, `plan`), when sent.
    pub permission_mode: Option<String>,
}

impl CommonFields {
    /// Validate the shape shared by all kinds plus `kind`'s own required
    /// fields, and read the common values.
    ///
    /// Missing fields are reported together, common ones first.
    pub(crate) fn validate(raw: &RawEvent, kind: HookEventKind) -> Result<Self, ValidationError> {
        let required: Vec<&str> = COMMON_FIELDS
            .iter()
            .chain(kind.required_fields())
            .copied()
            .collect();
        fields::require_fields(raw, &required, Some(kind))?;

        let declared = fields::require_str(raw, "hook_event_name", Some(kind))?;
        if declared != kind.as_str() {
            return Err(ValidationError::InvalidField {
                kind: Some(kind),
                field: "hook_event_name".to_string(),
                expected: kind.as_str(),
            });
        }

        Ok(Self {
            session_id: fields::require_str(raw, "session_id", Some(kind))?,
            transcript_path: fields::require_str(raw, "transcript_path", Some(kind))?,
            hook_event_name: kind,
            cwd: fields::get_str(raw, "cwd", ""),
            permission_mode: fields::get_opt_str(raw, "permission_mode"),
        })
    }
}

/// Read access shared by all event contexts.
pub trait EventContext {
    fn common(&self) -> &CommonFields;

    fn kind(&self) -> HookEventKind {
        self.common().hook_event_name
    }

    fn session_id(&self) -> &str {
        &self.common().session_id
    }

    fn transcript_path(&self) -> &str {
        &self.common().transcript_path
    }

    fn cwd(&self) -> &str {
        &self.common().cwd
    }

    fn permission_mode(&self) -> Option<&str> {
        self.common().permission_mode.as_deref()
    }
}

/// State every response builder carries: where to write, and an optional
/// `systemMessage` to attach to structured responses.
#[derive(Debug)]
pub struct OutputBase<O, E> {
    emitter: Emitter<O, E>,
    system_message: Option<String>,
}

impl<O: Write, E: Write> OutputBase<O, E> {
    pub(crate) fn new(emitter: Emitter<O, E>) -> Self {
        Self {
            emitter,
            system_message: None,
        }
    }

    /// Write a structured response and exit 0.
    pub(crate) fn respond(mut self, response: HookResponse) -> Exit {
        let response = response.with_system_message(self.system_message.take());
        tracing::info!(
            kind = %response.kind(),
            continue_processing = response.continue_processing,
            blocked = response.decision.is_some(),
            "Emitting hook response"
        );
        self.emitter.json(&response)
    }

    /// Exit 0 without writing anything.
    pub(crate) fn silent(self) -> Exit {
        Exit::SUCCESS
    }
}

/// Terminal actions available on every response builder.
///
/// Each action consumes the builder, so a builder can answer at most once.
pub trait HookOutput<O: Write, E: Write>: Sized {
    /// The event kind this builder answers.
    const KIND: HookEventKind;

    #[doc(hidden)]
    fn base(self) -> OutputBase<O, E>;

    #[doc(hidden)]
    fn base_mut(&mut self) -> &mut OutputBase<O, E>;

    /// Attach a `systemMessage` (a warning shown to the user) to the
    /// structured response this builder eventually emits.
    #[must_use]
    fn with_system_message(mut self, message: impl Into<String>) -> Self {
        self.base_mut().system_message = Some(message.into());
        self
    }

    /// Ask Claude Code to stop all further processing.
    ///
    /// `stop_reason` is shown to the user, not to Claude. Exits 0.
    fn halt(self, stop_reason: impl Into<String>, suppress_output: bool) -> Exit {
        let stop_reason = stop_reason.into();
        debug_assert!(!stop_reason.is_empty(), "halt requires a stop reason");
        self.base()
            .respond(HookResponse::halt(Self::KIND, stop_reason, suppress_output))
    }

    /// Simple mode: print `message` (if any) to stdout and exit 0.
    fn exit_success(self, message: Option<&str>) -> Exit {
        self.base().emitter.success(message)
    }

    /// Simple mode: print `message` to stderr and exit 1.
    fn exit_non_block(self, message: &str) -> Exit {
        self.exit_non_block_with_code(message, Exit::NON_BLOCKING.code())
    }

    /// Simple mode: print `message` to stderr and exit with `code`.
    ///
    /// A zero `code` is coerced to 1.
    fn exit_non_block_with_code(self, message: &str, code: u8) -> Exit {
        self.base().emitter.non_block_error(message, code)
    }

    /// Simple mode: print `reason` to stderr and exit 2.
    fn exit_block(self, reason: &str) -> Exit {
        self.base().emitter.block_error(reason)
    }
}

/// Implements [`HookOutput`] for a builder wrapping an [`OutputBase`].
macro_rules! impl_hook_output {
    ($builder:ident, $kind:expr) => {
        impl<O: std::io::Write, E: std::io::Write> $crate::contexts::HookOutput<O, E>
            for $builder<O, E>
        {
            const KIND: $crate::event::HookEventKind = $kind;

            fn base(self) -> $crate::contexts::OutputBase<O, E> {
                self.base
            }

            fn base_mut(&mut self) -> &mut $crate::contexts::OutputBase<O, E> {
                &mut self.base
            }
        }
    };
}

pub(crate) use impl_hook_output;
