#![allow(clippy::unwrap_used, clippy::expect_used)]

use serde_json::json;
use unordered_core::{unordered_deep, Value};

fn deep(value: serde_json::Value) -> Value {
    unordered_deep(Value::from(value))
}

#[test]
fn test_deep_accepts_nested_permutations() {
    let cases = [
        (json!([1, 2, 3]), json!([3, 2, 1])),
        (json!({"a": [1, 2, 3]}), json!({"a": [3, 2, 1]})),
        (json!([1, 2, {"a": [4, 5, 6]}]), json!([{"a": [6, 5, 4]}, 2, 1])),
        (
            json!([1, 2, {"a": [4, 5, 6], "b": [7, 8]}]),
            json!([{"b": [8, 7], "a": [6, 5, 4]}, 2, 1]),
        ),
        (json!([[1, 2], [3, 4]]), json!([[4, 3], [2, 1]])),
    ];
    for (expected, actual) in cases {
        let wrapped = deep(expected.clone());
        let actual = Value::from(actual.clone());
        assert!(wrapped == actual, "{} == {}", expected, actual);
        assert!(actual == wrapped, "{} == {}", actual, expected);
    }
}

#[test]
fn test_deep_tuples_match_lists() {
    let wrapped = unordered_deep(Value::tuple([Value::tuple([1, 2]), Value::Int(3)]));
    assert!(wrapped == Value::list([Value::Int(3), Value::list([2, 1])]));
}

#[test]
fn test_deep_rejects_changed_values() {
    let cases = [
        (json!([1, 2, 3]), json!([3, 2, 2])),
        (json!({"a": [1, 2]}), json!({"a": [2, 1, 1]})),
        (json!({"a": [1, 2]}), json!({"b": [2, 1]})),
        (json!([{"a": [4, 5]}]), json!([{"a": [5, 6]}])),
    ];
    for (expected, actual) in cases {
        let wrapped = deep(expected);
        let actual = Value::from(actual);
        assert!(wrapped != actual);
        assert!(actual != wrapped);
    }
}

#[test]
fn test_deep_leaves_scalars_and_sets() {
    assert!(matches!(deep(json!(5)), Value::Int(5)));
    assert!(matches!(deep(json!("abc")), Value::Str(_)));
    assert!(matches!(unordered_deep(Value::set([1, 2])), Value::Set(_)));
}

#[test]
fn test_deep_reorders_to_follow_actual() {
    let wrapped = deep(json!([1, 2, 3]));
    assert!(wrapped == Value::list([2, 3, 1]));
    assert_eq!(wrapped.to_string(), "[2, 3, 1]");
}
