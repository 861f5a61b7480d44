//! Turning input errors into a diagnostic and an exit.
//!
//! A hook that receives input it cannot understand should say so once on
//! stderr and get out of the way. The exit code comes from the configured
//! [`ErrorPolicy`]: non-blocking (1) by default, blocking (2) on request.

use std::error::Error;
use std::io::{Read, Write};

use crate::config::ErrorPolicy;
use crate::contexts::{self, HookContext};
use crate::error::{HookError, ParseError, ValidationError};
use crate::exit::{Emitter, Exit};

/// Report any [`HookError`] on `err` and return the policy's exit.
pub fn handle_context_error<W: Write>(error: &HookError, err: &mut W, policy: ErrorPolicy) -> Exit {
    tracing::debug!(category = error.category(), error = %error, "Rejecting hook input");
    match error {
        HookError::Parse(e) => handle_parse_error(e, err, policy),
        HookError::Validation(e) => handle_validation_error(e, err, policy),
        HookError::InvalidHookType(name) => handle_invalid_hook_type(name, err, policy),
    }
}

pub fn handle_parse_error<W: Write>(error: &ParseError, err: &mut W, policy: ErrorPolicy) -> Exit {
    let message = match error {
        ParseError::Io(e) => format!("Failed to read hook input: {e}"),
        other => format!("Hook input is not a valid JSON object: {other}"),
    };
    report(err, &message, policy)
}

pub fn handle_validation_error<W: Write>(
    error: &ValidationError,
    err: &mut W,
    policy: ErrorPolicy,
) -> Exit {
    report(err, &format!("Hook input rejected: {error}"), policy)
}

pub fn handle_invalid_hook_type<W: Write>(name: &str, err: &mut W, policy: ErrorPolicy) -> Exit {
    report(err, &format!("Unsupported hook event type: {name}"), policy)
}

/// Fall-through for errors outside the hook input taxonomy.
pub fn handle_unexpected_error<W: Write>(
    error: &dyn Error,
    err: &mut W,
    policy: ErrorPolicy,
) -> Exit {
    tracing::debug!(error = %error, "Unexpected hook failure");
    report(err, &format!("Unexpected error in hook: {error}"), policy)
}

/// [`contexts::create_context`], with failures already reported on the
/// emitter's error stream.
///
/// # Errors
///
/// Returns the [`Exit`] the hook should end with when the input could not be
/// classified.
pub fn safe_create_context<R: Read, O: Write, E: Write>(
    reader: R,
    emitter: &mut Emitter<O, E>,
    policy: ErrorPolicy,
) -> Result<HookContext, Exit> {
    contexts::create_context(reader)
        .map_err(|error| handle_context_error(&error, emitter.err_mut(), policy))
}

fn report<W: Write>(err: &mut W, message: &str, policy: ErrorPolicy) -> Exit {
    match policy.exit() {
        exit if exit.is_blocking() => crate::exit::emit_block_error(err, message),
        exit => crate::exit::emit_non_block_error(err, message, exit.code()),
    }
}
