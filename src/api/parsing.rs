//! Inbound event parsing.
//!
//! The Lambda proxy event wraps the caller's JSON in a `body` string field.
//! Extraction failures here are boundary errors (500); a missing or empty
//! topic inside a well-formed body is a validation error (400) and is
//! reported as `None`.

use serde_json::Value;

use crate::errors::BlogError;

/// Pulls the serialized JSON body out of the proxy event payload.
pub fn extract_body(payload: &Value) -> Result<&str, BlogError> {
    let body = payload
        .get("body")
        .ok_or_else(|| BlogError::ParseError("event has no 'body' field".to_string()))?;

    body.as_str()
        .ok_or_else(|| BlogError::ParseError("event 'body' is not a string".to_string()))
}

/// Deserializes the request body and extracts a usable `blog_topic`.
///
/// Returns `Ok(None)` when the body parses but `blog_topic` is missing,
/// not a string, or empty; those cases get the 400 response.
pub fn extract_topic(body: &str) -> Result<Option<String>, BlogError> {
    let request: Value = serde_json::from_str(body)?;

    let object = request
        .as_object()
        .ok_or_else(|| BlogError::ParseError("request body is not a JSON object".to_string()))?;

    Ok(object
        .get("blog_topic")
        .and_then(Value::as_str)
        .filter(|topic| !topic.is_empty())
        .map(str::to_string))
}
