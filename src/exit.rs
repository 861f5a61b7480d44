//! Process termination primitives.
//!
//! Every terminal action in this crate returns an [`Exit`] instead of ending
//! the process itself. A hook program finishes with `exit.terminate()` (or
//! returns it from `main` as an [`ExitCode`]); tests inspect the code and the
//! captured streams instead.

use std::io::{self, Write};
use std::process::ExitCode;

use serde::Serialize;

/// The exit code a hook process ends with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use = "an Exit does nothing until `terminate` is called or it is returned from main"]
pub struct Exit {
    code: u8,
}

impl Exit {
    /// Proceed normally. Structured responses always use this code.
    pub const SUCCESS: Self = Self { code: 0 };
    /// Non-blocking problem: stderr is shown to the user, processing continues.
    pub const NON_BLOCKING: Self = Self { code: 1 };
    /// Blocking problem: stderr is fed back to Claude and the action is denied.
    pub const BLOCKING: Self = Self { code: 2 };

    /// A non-blocking exit with a caller-chosen code.
    ///
    /// Zero is not a failure code; it is coerced to 1.
    pub fn non_blocking(code: u8) -> Self {
        if code == 0 {
            tracing::warn!("Non-blocking exit requested with code 0, using 1");
            Self::NON_BLOCKING
        } else {
            Self { code }
        }
    }

    #[must_use]
    pub fn code(self) -> u8 {
        self.code
    }

    #[must_use]
    pub fn is_success(self) -> bool {
        self.code == 0
    }

    #[must_use]
    pub fn is_blocking(self) -> bool {
        self.code == 2
    }

    /// End the process with this code.
    pub fn terminate(self) -> ! {
        tracing::debug!(code = self.code, "Hook exiting");
        std::process::exit(i32::from(self.code))
    }
}

impl From<Exit> for ExitCode {
    fn from(exit: Exit) -> Self {
        ExitCode::from(exit.code)
    }
}

/// The pair of streams a hook writes its response to.
///
/// Stdout carries structured JSON and success messages; stderr carries
/// error text. Tests inject in-memory buffers.
#[derive(Debug)]
pub struct Emitter<O = io::Stdout, E = io::Stderr> {
    out: O,
    err: E,
}

impl Emitter {
    /// Bind the process's standard streams.
    #[must_use]
    pub fn stdio() -> Self {
        Self {
            out: io::stdout(),
            err: io::stderr(),
        }
    }
}

impl Default for Emitter {
    fn default() -> Self {
        Self::stdio()
    }
}

impl<O: Write, E: Write> Emitter<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self { out, err }
    }

    /// Give back the underlying streams.
    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }

    /// Serialize `payload` as one JSON line on stdout and exit 0.
    ///
    /// If the payload cannot be written the host would see no decision at
    /// all, so the exit falls back to [`Exit::NON_BLOCKING`].
    pub fn json<T: Serialize>(&mut self, payload: &T) -> Exit {
        let written = serde_json::to_writer(&mut self.out, payload)
            .map_err(io::Error::from)
            .and_then(|()| writeln!(self.out))
            .and_then(|()| self.out.flush());

        match written {
            Ok(()) => Exit::SUCCESS,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to write hook response");
                Exit::NON_BLOCKING
            }
        }
    }

    /// See [`emit_success`].
    pub fn success(&mut self, message: Option<&str>) -> Exit {
        emit_success(&mut self.out, message)
    }

    /// See [`emit_non_block_error`].
    pub fn non_block_error(&mut self, message: &str, code: u8) -> Exit {
        emit_non_block_error(&mut self.err, message, code)
    }

    /// See [`emit_block_error`].
    pub fn block_error(&mut self, reason: &str) -> Exit {
        emit_block_error(&mut self.err, reason)
    }

    pub(crate) fn err_mut(&mut self) -> &mut E {
        &mut self.err
    }
}

/// Write `message` (if any) to `out` and exit 0.
pub fn emit_success<W: Write>(out: &mut W, message: Option<&str>) -> Exit {
    if let Some(message) = message {
        write_line(out, message);
    }
    Exit::SUCCESS
}

/// Write `message` to `err` and exit with a non-blocking `code` (1 by convention).
pub fn emit_non_block_error<W: Write>(err: &mut W, message: &str, code: u8) -> Exit {
    write_line(err, message);
    Exit::non_blocking(code)
}

/// Write `reason` to `err` and exit 2.
pub fn emit_block_error<W: Write>(err: &mut W, reason: &str) -> Exit {
    write_line(err, reason);
    Exit::BLOCKING
}

fn write_line<W: Write>(w: &mut W, text: &str) {
    if let Err(e) = writeln!(w, "{text}").and_then(|()| w.flush()) {
        tracing::warn!(error = %e, "Failed to write hook message");
    }
}
