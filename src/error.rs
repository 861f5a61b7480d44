//! Error types for reading and classifying hook input.

use crate::event::HookEventKind;

/// Errors raised while turning raw hook input into a typed context.
///
/// None of these terminate the process; see [`crate::handlers`] for the
/// conventional mapping to an exit code.
#[derive(thiserror::Error, Debug)]
pub enum HookError {
    /// The input could not be read or is not a JSON object.
    #[error("Failed to parse hook input: {0}")]
    Parse(#[from] ParseError),

    /// The event kind is known but a required field is missing or malformed.
    #[error("Invalid hook input: {0}")]
    Validation(#[from] ValidationError),

    /// `hook_event_name` is present but names no known event.
    #[error("Unknown hook event type: {0}")]
    InvalidHookType(String),
}

impl HookError {
    /// Short category label used in log fields.
    #[must_use]
    pub fn category(&self) -> &'static str {
        match self {
            Self::Parse(_) => "parse",
            Self::Validation(_) => "validation",
            Self::InvalidHookType(_) => "invalid_hook_type",
        }
    }
}

/// The input stream did not yield a usable JSON object.
#[derive(thiserror::Error, Debug)]
pub enum ParseError {
    /// Reading the stream failed, including invalid UTF-8.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stream held nothing but whitespace.
    #[error("input is empty")]
    Empty,

    /// The text is not valid JSON.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Valid JSON, but the top-level value is not an object.
    #[error("expected object at top level, found {found}")]
    NotAnObject { found: &'static str },
}

/// A recognised (or missing) event kind failed its field checks.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// One or more required keys are absent (or `null`).
    #[error("Missing required {} fields: {}", scope(.kind), .fields.join(", "))]
    MissingFields {
        kind: Option<HookEventKind>,
        fields: Vec<String>,
    },

    /// A required key is present with the wrong JSON type or value.
    #[error("Invalid {} field {field}: expected {expected}", scope(.kind))]
    InvalidField {
        kind: Option<HookEventKind>,
        field: String,
        expected: &'static str,
    },
}

impl ValidationError {
    /// Names of the fields this error is about.
    #[must_use]
    pub fn fields(&self) -> Vec<&str> {
        match self {
            Self::MissingFields { fields, .. } => fields.iter().map(String::as_str).collect(),
            Self::InvalidField { field, .. } => vec![field.as_str()],
        }
    }

    /// The event kind being validated, if it was known.
    #[must_use]
    pub fn kind(&self) -> Option<HookEventKind> {
        match self {
            Self::MissingFields { kind, .. } | Self::InvalidField { kind, .. } => *kind,
        }
    }
}

fn scope(kind: &Option<HookEventKind>) -> &'static str {
    kind.map_or("hook", HookEventKind::as_str)
}
