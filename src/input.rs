use crate::mcp::contracts::MAX_INPUT_BYTES;
use crate::mcp::errors;
use crate::store::Document;
use serde_json::{Map, Value};
use std::fmt;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct InputError {
    pub kind: &'static str,
    pub message: String,
}

impl InputError {
    fn new(kind: &'static str, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(errors::INVALID_INPUT, message)
    }
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for InputError {}

fn object(args: &Value) -> Result<&Map<String, Value>, InputError> {
    args.as_object()
        .ok_or_else(|| InputError::invalid_input("arguments must be an object"))
}

pub fn required_str<'a>(args: &'a Value, name: &str) -> Result<&'a str, InputError> {
    let value = object(args)?
        .get(name)
        .ok_or_else(|| InputError::invalid_input(format!("{name} is required")))?;
    value
        .as_str()
        .ok_or_else(|| InputError::invalid_input(format!("{name} must be a string")))
}

/// Reads a non-negative integer argument. Negative numbers are rejected
/// rather than clamped.
pub fn optional_limit(args: &Value, name: &str, default: usize) -> Result<usize, InputError> {
    let Some(value) = object(args)?.get(name) else {
        return Ok(default);
    };
    if value.is_null() {
        return Ok(default);
    }
    if let Some(limit) = value.as_u64() {
        return Ok(usize::try_from(limit).unwrap_or(usize::MAX));
    }
    if value.as_i64().is_some() {
        return Err(InputError::invalid_input(format!(
            "{name} must be zero or greater"
        )));
    }
    Err(InputError::invalid_input(format!(
        "{name} must be an integer"
    )))
}

/// Parses `document_data` into a [`Document`]. Any object is accepted as long
/// as `title`, `author` and `content` are strings or null when present.
pub fn load_document(args: &Value) -> Result<Document, InputError> {
    let data = object(args)?
        .get("document_data")
        .ok_or_else(|| InputError::invalid_input("document_data is required"))?;
    if !data.is_object() {
        return Err(InputError::invalid_input("document_data must be an object"));
    }
    serde_json::from_value(data.clone())
        .map_err(|err| InputError::invalid_input(format!("document_data is invalid: {err}")))
}

/// Reads a UTF-8 text file for the one-shot CLI commands.
pub fn read_text_file(path: &str) -> Result<String, InputError> {
    let path_ref = Path::new(path);
    let metadata = fs::metadata(path_ref)
        .map_err(|_| InputError::invalid_input("path must exist and be a file"))?;
    if !metadata.is_file() {
        return Err(InputError::invalid_input("path must be a file"));
    }
    let len = metadata.len();
    if len > MAX_INPUT_BYTES {
        return Err(InputError::invalid_input(format!(
            "input exceeds limit: {len} bytes (max {MAX_INPUT_BYTES})"
        )));
    }
    fs::read_to_string(path_ref)
        .map_err(|_| InputError::invalid_input("path must contain UTF-8 text"))
}
