//! Response builders for the Lambda proxy contract.
//!
//! Every invocation ends in a `{statusCode, body}` payload. The body is the
//! message run through JSON string serialization, so it keeps its
//! surrounding quotes on the wire.

use serde_json::{Value, json};

/// Message returned when `blog_topic` is absent or empty.
pub const MSG_MISSING_TOPIC: &str = "Missing 'blog_topic' in request";

/// Message returned on the happy path, whether or not generation succeeded.
pub const MSG_COMPLETED: &str = "✅ Blog Generation is completed";

/// Message returned when the event cannot be understood at all.
pub const MSG_INTERNAL_ERROR: &str = "Internal Server Error";

/// Returns a 200 OK response with the given message.
#[must_use]
pub fn ok_response(message: &str) -> Value {
    json!({ "statusCode": 200, "body": json!(message).to_string() })
}

/// Returns an error response with the given status code and message.
#[must_use]
pub fn err_response(status_code: u16, message: &str) -> Value {
    json!({ "statusCode": status_code, "body": json!(message).to_string() })
}
