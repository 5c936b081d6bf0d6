//! Recursive wrapping of nested fixtures.

use crate::unordered::unordered_once;
use crate::value::Value;

/// Make every list and tuple level of `value` order-insensitive
///
/// Maps keep their keys and have their values wrapped recursively; lists
/// and tuples become unordered wrappers of their wrapped elements, without
/// a type check. Sets and scalars are returned unchanged. Cyclic data is
/// not representable as a [`Value`].
///
/// ```
/// use serde_json::json;
/// use unordered_core::{unordered_deep, Value};
///
/// let expected = unordered_deep(Value::from(json!([1, 2, {"a": [4, 5, 6]}])));
/// assert!(expected == Value::from(json!([{"a": [6, 5, 4]}, 2, 1])));
/// ```
pub fn unordered_deep(value: Value) -> Value {
    match value {
        Value::Map(entries) => Value::Map(
            entries
                .into_iter()
                .map(|(key, value)| (key, unordered_deep(value)))
                .collect(),
        ),
        Value::List(items) | Value::Tuple(items) => {
            Value::Unordered(unordered_once(items.into_iter().map(unordered_deep)))
        }
        other => other,
    }
}
