use serde_json::json;

use blogforge::api::parsing::{extract_body, extract_topic};

#[test]
fn test_extract_body_returns_inner_string() {
    let payload = json!({ "body": "{\"blog_topic\": \"rust\"}" });
    let body = extract_body(&payload).unwrap();
    assert_eq!(body, "{\"blog_topic\": \"rust\"}");
}

#[test]
fn test_extract_body_rejects_missing_field() {
    let payload = json!({ "headers": {} });
    let result = extract_body(&payload);
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("no 'body' field"));
}

#[test]
fn test_extract_body_rejects_non_string_body() {
    let payload = json!({ "body": { "blog_topic": "rust" } });
    let result = extract_body(&payload);
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("not a string"));
}

#[test]
fn test_extract_topic_present() {
    let topic = extract_topic(r#"{"blog_topic": "rust lifetimes"}"#).unwrap();
    assert_eq!(topic.as_deref(), Some("rust lifetimes"));
}

#[test]
fn test_extract_topic_missing_or_empty_is_none() {
    // Missing, empty, and non-string values are all validation failures,
    // not parse errors.
    assert_eq!(extract_topic(r"{}").unwrap(), None);
    assert_eq!(extract_topic(r#"{"blog_topic": ""}"#).unwrap(), None);
    assert_eq!(extract_topic(r#"{"blog_topic": null}"#).unwrap(), None);
    assert_eq!(extract_topic(r#"{"blog_topic": 42}"#).unwrap(), None);
}

#[test]
fn test_extract_topic_invalid_json_is_error() {
    assert!(extract_topic("not json").is_err());
    assert!(extract_topic(r#"["blog_topic"]"#).is_err());
}

#[test]
fn test_extract_topic_keeps_whitespace_topics() {
    // A whitespace-only topic is non-empty and passes validation, matching
    // the original handler's truthiness check.
    let topic = extract_topic(r#"{"blog_topic": " "}"#).unwrap();
    assert_eq!(topic.as_deref(), Some(" "));
}
