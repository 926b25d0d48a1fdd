//! Lenient request body parsing.
//!
//! Dashboard endpoints read their parameters from a JSON body that may arrive on a GET
//! request, may be empty, or may carry values of the wrong type. Rather than letting an
//! extractor reject such requests with a non-200 status, bodies are parsed here into a
//! JSON object and each field is checked individually so that the matching sentinel can
//! be returned.
//!
//! A field counts as missing when it is absent, `null` or the empty string.

use axum::body::Bytes;
use serde_json::{Map, Value};

use crate::server::error::dashboard::DashboardError;

/// Parsed request body.
pub type Body = Map<String, Value>;

/// Parses the raw request body into a JSON object.
///
/// # Returns
/// - `Ok(Body)` - Object holding the request parameters
/// - `Err(DashboardError::MissingParam)` - Body is empty
/// - `Err(DashboardError::InvalidParam)` - Body is not JSON or not a JSON object
pub fn parse_body(bytes: &Bytes) -> Result<Body, DashboardError> {
    if bytes.iter().all(|b| b.is_ascii_whitespace()) {
        return Err(DashboardError::MissingParam("body"));
    }

    match serde_json::from_slice::<Value>(bytes) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(DashboardError::invalid("body", "expected a JSON object")),
        Err(e) => Err(DashboardError::invalid("body", e.to_string())),
    }
}

/// Returns the field if it is present and not empty.
pub fn required<'a>(body: &'a Body, name: &'static str) -> Result<&'a Value, DashboardError> {
    match body.get(name) {
        None | Some(Value::Null) => Err(DashboardError::MissingParam(name)),
        Some(Value::String(s)) if s.is_empty() => Err(DashboardError::MissingParam(name)),
        Some(value) => Ok(value),
    }
}

/// Reads a required string field.
pub fn required_string(body: &Body, name: &'static str) -> Result<String, DashboardError> {
    as_string(required(body, name)?, name)
}

/// Reads a required object field.
pub fn required_object<'a>(body: &'a Body, name: &'static str) -> Result<&'a Body, DashboardError> {
    match required(body, name)? {
        Value::Object(map) => Ok(map),
        other => Err(DashboardError::invalid(
            name,
            format!("expected an object, got {}", type_name(other)),
        )),
    }
}

/// Reads a required array of strings.
pub fn required_string_list(body: &Body, name: &'static str) -> Result<Vec<String>, DashboardError> {
    let Value::Array(items) = required(body, name)? else {
        return Err(DashboardError::invalid(name, "expected an array of strings"));
    };

    items.iter().map(|item| as_string(item, name)).collect()
}

pub fn as_string(value: &Value, name: &'static str) -> Result<String, DashboardError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        other => Err(DashboardError::invalid(
            name,
            format!("expected a string, got {}", type_name(other)),
        )),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
