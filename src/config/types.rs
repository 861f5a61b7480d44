//! Configuration types.

use serde::{Deserialize, Serialize};

use crate::exit::Exit;

/// Top-level hook configuration, read from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HookConfig {
    pub logging: LoggingConfig,
    pub errors: ErrorPolicy,
}

/// Verbosity of diagnostic logging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Off,
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// The directive understood by `tracing_subscriber::EnvFilter`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }

    /// Raise the level by `steps` (one per `-v` flag), saturating at trace.
    #[must_use]
    pub fn raised(self, steps: u8) -> Self {
        const ORDER: [LogLevel; 6] = [
            LogLevel::Off,
            LogLevel::Error,
            LogLevel::Warn,
            LogLevel::Info,
            LogLevel::Debug,
            LogLevel::Trace,
        ];
        let current = ORDER.iter().position(|l| *l == self).unwrap_or(2);
        ORDER[(current + usize::from(steps)).min(ORDER.len() - 1)]
    }
}

/// Diagnostic logging settings.
///
/// Logs always go to stderr; stdout is reserved for the hook response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Colour log lines. Off by default since the host may feed stderr back
    /// to Claude verbatim.
    pub ansi: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Warn,
            ansi: false,
        }
    }
}

/// How malformed hook input is reported to the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorMode {
    /// Exit 1: the user sees the diagnostic and processing continues.
    #[default]
    NonBlocking,
    /// Exit 2: the diagnostic goes to Claude and the action is denied.
    Blocking,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorPolicy {
    pub mode: ErrorMode,
}

impl ErrorPolicy {
    #[must_use]
    pub fn blocking() -> Self {
        Self {
            mode: ErrorMode::Blocking,
        }
    }

    /// The exit an input error ends with under this policy.
    pub fn exit(self) -> Exit {
        match self.mode {
            ErrorMode::NonBlocking => Exit::NON_BLOCKING,
            ErrorMode::Blocking => Exit::BLOCKING,
        }
    }
}
