//! Reading raw hook input from a stream.

use std::io::Read;

use serde_json::Value;

use crate::error::{HookError, ParseError};
use crate::fields::RawEvent;

/// Read the whole stream and parse it as a JSON object.
///
/// # Errors
///
/// Returns [`ParseError`] (wrapped in [`HookError::Parse`]) if the stream
/// cannot be read, is empty, is not valid JSON, or holds a JSON value other
/// than an object.
pub fn read_raw_event<R: Read>(mut reader: R) -> Result<RawEvent, HookError> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(ParseError::from)?;

    parse_raw_event(&text)
}

/// Read a raw event from the process's standard input.
///
/// # Errors
///
/// See [`read_raw_event`].
pub fn read_raw_event_from_stdin() -> Result<RawEvent, HookError> {
    read_raw_event(std::io::stdin().lock())
}

/// Parse already-read text as a raw event.
///
/// # Errors
///
/// See [`read_raw_event`].
pub fn parse_raw_event(text: &str) -> Result<RawEvent, HookError> {
    if text.trim().is_empty() {
        return Err(ParseError::Empty.into());
    }

    let value: Value = serde_json::from_str(text).map_err(ParseError::from)?;
    match value {
        Value::Object(map) => {
            tracing::trace!(keys = map.len(), "Parsed hook input");
            Ok(map)
        }
        other => Err(ParseError::NotAnObject {
            found: json_type_name(&other),
        }
        .into()),
    }
}

/// Name of a JSON value's type, as used in diagnostics.
#[must_use]
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
