#![allow(clippy::unwrap_used, clippy::expect_used)]

use serde_json::json;
use unordered_core::assertion::failure_message;
use unordered_core::report::ReportConfig;
use unordered_core::{assert_unordered_eq, unordered, unordered_deep, Value};

#[test]
fn test_passes_for_permutation() {
    assert_unordered_eq!(unordered!(1, 2, 3).unwrap(), json!([3, 1, 2]));
    assert_unordered_eq!(json!([3, 1, 2]), unordered!(1, 2, 3).unwrap());
    assert_unordered_eq!(
        unordered_deep(Value::from(json!({"ids": [1, 2]}))),
        json!({"ids": [2, 1]})
    );
}

#[test]
fn test_passes_for_plain_equal_values() {
    assert_unordered_eq!(json!({"a": 1}), json!({"a": 1}));
}

#[test]
#[should_panic(expected = "Extra items in the left sequence:")]
fn test_panics_with_extra_left_items() {
    assert_unordered_eq!(unordered!(1, 2, 3, 3).unwrap(), Value::list([1, 2, 3]));
}

#[test]
#[should_panic(expected = "Type mismatch:")]
fn test_panics_with_type_mismatch() {
    assert_unordered_eq!(Value::list([3, 2, 1]), unordered!(Value::tuple([1, 2, 3])).unwrap());
}

#[test]
#[should_panic(expected = "left: 1")]
fn test_panics_with_plain_message_without_wrapper() {
    assert_unordered_eq!(Value::Int(1), Value::Int(2));
}

#[test]
#[should_panic(expected = "Common items:")]
fn test_explicit_config_controls_verbosity() {
    let config = ReportConfig::default().with_verbosity(2);
    assert_unordered_eq!(
        json!([{"a": 1, "b": 2}, 2, 3]),
        unordered!(2, 3, Value::from(json!({"b": 2, "a": 3}))).unwrap(),
        &config
    );
}

#[test]
fn test_failure_message_layout() {
    let left = Value::from(unordered!(1, 2, 3, 3).unwrap());
    let message = failure_message(&ReportConfig::default(), &left, &Value::list([1, 2, 3]));
    assert_eq!(
        message,
        "assertion `left == right` failed\n  [1, 2, 3, 3] == [1, 2, 3]\n  Extra items in the left sequence:\n  3"
    );
}
