//! Dynamic value model
//!
//! Test fixtures are compared as [`Value`] trees. Equality on `Value` is the
//! ambient equality used by the matcher: an [`Value::Unordered`] operand on
//! either side switches that level to order-insensitive comparison.

use crate::matcher;
use crate::unordered::UnorderedList;
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use std::fmt;

/// A dynamically-typed fixture value
#[derive(Debug, Clone)]
pub enum Value {
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
    Tuple(Vec<Value>),
    /// Distinct elements, compared without regard to order
    Set(Vec<Value>),
    /// Key/value entries, compared without regard to entry order
    Map(Vec<(Value, Value)>),
    Unordered(UnorderedList),
    /// Wildcard that equals every value
    Any,
}

/// Runtime type identity of a value, used for strict type checks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    None,
    Bool,
    Int,
    Float,
    Str,
    List,
    Tuple,
    Set,
    Map,
    Unordered,
    Any,
    /// One-shot producer
    Generator,
}

impl ValueType {
    pub fn name(&self) -> &'static str {
        match self {
            ValueType::None => "none",
            ValueType::Bool => "bool",
            ValueType::Int => "int",
            ValueType::Float => "float",
            ValueType::Str => "str",
            ValueType::List => "list",
            ValueType::Tuple => "tuple",
            ValueType::Set => "set",
            ValueType::Map => "map",
            ValueType::Unordered => "unordered",
            ValueType::Any => "any",
            ValueType::Generator => "generator",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<type '{}'>", self.name())
    }
}

/// Capability class of an expected value, decided once at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Mapping,
    Sequence,
    OneShotProducer,
    Scalar,
    Other,
}

impl Value {
    /// Build a list value
    pub fn list<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Value::List(items.into_iter().map(Into::into).collect())
    }

    /// Build a tuple value
    pub fn tuple<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Value::Tuple(items.into_iter().map(Into::into).collect())
    }

    /// Build a set value; duplicates are dropped, first occurrence wins
    pub fn set<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        let mut distinct: Vec<Value> = Vec::new();
        for item in items {
            let item = item.into();
            if !distinct.contains(&item) {
                distinct.push(item);
            }
        }
        Value::Set(distinct)
    }

    /// Build a map value; a repeated key replaces the earlier value in place
    pub fn map<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Value>,
        V: Into<Value>,
    {
        let mut out: Vec<(Value, Value)> = Vec::new();
        for (key, value) in entries {
            let (key, value) = (key.into(), value.into());
            match out.iter_mut().find(|(k, _)| *k == key) {
                Some(slot) => slot.1 = value,
                None => out.push((key, value)),
            }
        }
        Value::Map(out)
    }

    pub fn value_type(&self) -> ValueType {
        match self {
            Value::None => ValueType::None,
            Value::Bool(_) => ValueType::Bool,
            Value::Int(_) => ValueType::Int,
            Value::Float(_) => ValueType::Float,
            Value::Str(_) => ValueType::Str,
            Value::List(_) => ValueType::List,
            Value::Tuple(_) => ValueType::Tuple,
            Value::Set(_) => ValueType::Set,
            Value::Map(_) => ValueType::Map,
            Value::Unordered(_) => ValueType::Unordered,
            Value::Any => ValueType::Any,
        }
    }

    pub fn kind(&self) -> Kind {
        match self {
            Value::Map(_) => Kind::Mapping,
            Value::List(_)
            | Value::Tuple(_)
            | Value::Set(_)
            | Value::Str(_)
            | Value::Unordered(_) => Kind::Sequence,
            Value::None | Value::Bool(_) | Value::Int(_) | Value::Float(_) => Kind::Scalar,
            Value::Any => Kind::Other,
        }
    }

    /// Whether iterating this value yields elements
    ///
    /// Maps iterate over their keys.
    pub fn is_iterable(&self) -> bool {
        matches!(self.kind(), Kind::Sequence | Kind::Mapping)
    }

    pub fn is_unordered(&self) -> bool {
        matches!(self, Value::Unordered(_))
    }

    /// Run `f` over the elements this value iterates to
    ///
    /// Strings yield one-character strings, maps yield their keys, and an
    /// unordered wrapper yields its items in current order. Returns `None`
    /// for values that are not iterable.
    pub fn with_elements<R>(&self, f: impl FnOnce(&[Value]) -> R) -> Option<R> {
        match self {
            Value::List(items) | Value::Tuple(items) | Value::Set(items) => Some(f(items)),
            Value::Str(s) => {
                let chars: Vec<Value> = s.chars().map(|c| Value::Str(c.to_string())).collect();
                Some(f(&chars))
            }
            Value::Map(entries) => {
                let keys: Vec<Value> = entries.iter().map(|(k, _)| k.clone()).collect();
                Some(f(&keys))
            }
            Value::Unordered(list) => Some(f(&list.items())),
            Value::None | Value::Bool(_) | Value::Int(_) | Value::Float(_) | Value::Any => None,
        }
    }

    /// Materialize the elements of an iterable value
    pub fn to_elements(&self) -> Option<Vec<Value>> {
        self.with_elements(<[Value]>::to_vec)
    }
}

fn maps_equal(left: &[(Value, Value)], right: &[(Value, Value)]) -> bool {
    left.len() == right.len()
        && left.iter().all(|(key, value)| {
            right
                .iter()
                .find(|(k, _)| k == key)
                .is_some_and(|(_, v)| value == v)
        })
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Any, _) | (_, Value::Any) => true,
            (Value::Unordered(a), Value::Unordered(b)) => a == b,
            (Value::Unordered(list), actual) | (actual, Value::Unordered(list)) => {
                list.equals(actual)
            }
            (Value::None, Value::None) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Int(i), Value::Float(f)) | (Value::Float(f), Value::Int(i)) => {
                (*i as f64) == *f
            }
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::List(a), Value::List(b)) | (Value::Tuple(a), Value::Tuple(b)) => a == b,
            (Value::Set(a), Value::Set(b)) => matcher::is_permutation(a, b),
            (Value::Map(a), Value::Map(b)) => maps_equal(a, b),
            _ => false,
        }
    }
}

fn write_items(f: &mut fmt::Formatter<'_>, items: &[Value]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::None => f.write_str("null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{:?}", x),
            Value::Str(s) => write!(f, "{:?}", s),
            Value::List(items) => {
                f.write_str("[")?;
                write_items(f, items)?;
                f.write_str("]")
            }
            Value::Tuple(items) => {
                f.write_str("(")?;
                write_items(f, items)?;
                if items.len() == 1 {
                    f.write_str(",")?;
                }
                f.write_str(")")
            }
            Value::Set(items) if items.is_empty() => f.write_str("set()"),
            Value::Set(items) => {
                f.write_str("{")?;
                write_items(f, items)?;
                f.write_str("}")
            }
            Value::Map(entries) => {
                f.write_str("{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                f.write_str("}")
            }
            Value::Unordered(list) => write!(f, "{}", list),
            Value::Any => f.write_str("ANY"),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::None => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(i) => serializer.serialize_i64(*i),
            Value::Float(x) => serializer.serialize_f64(*x),
            Value::Str(s) => serializer.serialize_str(s),
            Value::List(items) | Value::Tuple(items) | Value::Set(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Unordered(list) => {
                let items = list.items();
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items.iter() {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Map(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    // JSON object keys must be strings
                    match key {
                        Value::Str(s) => map.serialize_entry(s, value)?,
                        other => map.serialize_entry(&other.to_string(), value)?,
                    }
                }
                map.end()
            }
            Value::Any => serializer.serialize_str("ANY"),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<u32> for Value {
    fn from(i: u32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::Str(c.to_string())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::list(items)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::None, Into::into)
    }
}

impl From<UnorderedList> for Value {
    fn from(list: UnorderedList) -> Self {
        Value::Unordered(list)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::None,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Value::Str(s),
            serde_json::Value::Array(items) => Value::list(items),
            serde_json::Value::Object(entries) => Value::Map(
                entries
                    .into_iter()
                    .map(|(k, v)| (Value::Str(k), Value::from(v)))
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numeric_cross_equality() {
        assert_eq!(Value::Int(1), Value::Float(1.0));
        assert_ne!(Value::Int(1), Value::Float(1.5));
    }

    #[test]
    fn test_bool_is_not_a_number() {
        assert_ne!(Value::Bool(true), Value::Int(1));
        assert_ne!(Value::Bool(false), Value::Float(0.0));
        assert_eq!(Value::Bool(true), Value::Bool(true));
    }

    #[test]
    fn test_list_and_tuple_are_distinct() {
        assert_ne!(Value::list([1, 2]), Value::tuple([1, 2]));
        assert_eq!(Value::tuple([1, 2]), Value::tuple([1, 2]));
    }

    #[test]
    fn test_set_ignores_order_and_duplicates() {
        let a = Value::set([3, 2, 1, 1]);
        assert_eq!(a, Value::set([1, 2, 3]));
        assert_eq!(a.to_elements().map(|e| e.len()), Some(3));
    }

    #[test]
    fn test_map_ignores_entry_order() {
        let a = Value::from(json!({"a": 1, "b": 2}));
        let b = Value::map([("b", 2), ("a", 1)]);
        assert_eq!(a, b);
        assert_ne!(a, Value::map([("a", 1), ("b", 3)]));
    }

    #[test]
    fn test_any_matches_everything() {
        assert_eq!(Value::Any, Value::Int(3));
        assert_eq!(Value::map([("x", Value::Any)]), Value::map([("x", "y")]));
    }

    #[test]
    fn test_kind_classification() {
        assert_eq!(Value::from(json!({})).kind(), Kind::Mapping);
        assert_eq!(Value::from("abc").kind(), Kind::Sequence);
        assert_eq!(Value::Int(3).kind(), Kind::Scalar);
        assert_eq!(Value::None.kind(), Kind::Scalar);
        assert_eq!(Value::Any.kind(), Kind::Other);
    }

    #[test]
    fn test_string_iterates_characters() {
        let chars = Value::from("ab").to_elements();
        assert_eq!(chars, Some(vec![Value::from("a"), Value::from("b")]));
        assert_eq!(Value::Int(1).to_elements(), None);
    }

    #[test]
    fn test_display() {
        let v = Value::list([
            Value::map([("a", 1)]),
            Value::tuple([2]),
            Value::set(Vec::<Value>::new()),
            Value::Float(1.0),
            Value::None,
        ]);
        assert_eq!(v.to_string(), r#"[{"a": 1}, (2,), set(), 1.0, null]"#);
    }

    #[test]
    fn test_serialize_to_json() {
        let v = Value::map([(Value::Int(1), Value::tuple(["a"]))]);
        assert_eq!(serde_json::to_value(&v).unwrap(), json!({"1": ["a"]}));
    }
}
