use chrono::{Local, TimeZone};
use regex::Regex;

use blogforge::storage::{artifact_key, artifact_key_at};

#[test]
fn test_artifact_key_format() {
    let time = Local.with_ymd_and_hms(2024, 3, 5, 9, 7, 3).unwrap();
    assert_eq!(artifact_key_at("blog-output", time), "blog-output/090703.txt");
}

#[test]
fn test_artifact_key_zero_padding() {
    let time = Local.with_ymd_and_hms(2024, 3, 5, 0, 0, 0).unwrap();
    assert_eq!(artifact_key_at("blog-output", time), "blog-output/000000.txt");
}

#[test]
fn test_artifact_key_matches_contract_pattern() {
    let pattern = Regex::new(r"^blog-output/\d{6}\.txt$").unwrap();
    let key = artifact_key("blog-output");
    assert!(pattern.is_match(&key), "unexpected key: {key}");
}

#[test]
fn test_distinct_times_give_distinct_keys() {
    // Identical topics on separate invocations never collide because the
    // key is derived from the invocation time.
    let first = Local.with_ymd_and_hms(2024, 3, 5, 10, 30, 1).unwrap();
    let second = Local.with_ymd_and_hms(2024, 3, 5, 10, 30, 2).unwrap();
    assert_ne!(
        artifact_key_at("blog-output", first),
        artifact_key_at("blog-output", second)
    );
}

#[test]
fn test_custom_prefix() {
    let time = Local.with_ymd_and_hms(2024, 3, 5, 23, 59, 59).unwrap();
    assert_eq!(artifact_key_at("drafts", time), "drafts/235959.txt");
}
