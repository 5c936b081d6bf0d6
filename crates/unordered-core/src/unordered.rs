//! The comparable wrapper.
//!
//! An [`UnorderedList`] holds a materialized copy of the expected elements
//! and compares equal to any actual value holding the same elements with
//! the same multiplicities, in any order.
//!
//! After a successful comparison the wrapper reorders its own items to
//! follow the actual value, so printing it afterwards lines up with what
//! was compared. The items live in a `RefCell` owned by the wrapper; that
//! cell is the only state an equality check mutates.

use crate::errors::{Result, UnorderedError};
use crate::matcher::{self, Diff, Matching};
use crate::value::{Kind, Value, ValueType};
use crate::{log_op_end, log_op_error, log_op_start};
use std::cell::{Ref, RefCell};
use std::fmt;
use std::time::Instant;

/// Input accepted by [`make`]
pub enum Expected {
    Value(Value),
    /// A single-pass producer, drained at construction
    OneShot(Box<dyn Iterator<Item = Value>>),
}

impl Expected {
    /// Wrap a single-pass producer
    pub fn once<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Value>,
        I::IntoIter: 'static,
    {
        Expected::OneShot(Box::new(iter.into_iter()))
    }

    pub fn kind(&self) -> Kind {
        match self {
            Expected::Value(value) => value.kind(),
            Expected::OneShot(_) => Kind::OneShotProducer,
        }
    }

    fn into_value(self) -> Value {
        match self {
            Expected::Value(value) => value,
            Expected::OneShot(iter) => Value::List(iter.collect()),
        }
    }
}

impl From<Value> for Expected {
    fn from(value: Value) -> Self {
        Expected::Value(value)
    }
}

impl fmt::Debug for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Expected::OneShot(_) => f.write_str("OneShot(..)"),
        }
    }
}

/// Expected collection that compares equal regardless of element order
#[derive(Debug, Clone)]
pub struct UnorderedList {
    items: RefCell<Vec<Value>>,
    expected_type: Option<ValueType>,
}

impl UnorderedList {
    /// Wrap a single iterable value
    ///
    /// With `check_type`, the actual value must have the same [`ValueType`]
    /// as `expected` to compare equal.
    ///
    /// # Errors
    ///
    /// `InvalidExpectedKind` when `expected` is a mapping or is not iterable.
    pub fn new(expected: Value, check_type: bool) -> Result<Self> {
        match expected.kind() {
            Kind::Mapping | Kind::Scalar | Kind::Other => {
                Err(UnorderedError::InvalidExpectedKind {
                    kind: expected.kind(),
                    repr: expected.to_string(),
                })
            }
            Kind::Sequence | Kind::OneShotProducer => {
                let items = expected.to_elements().unwrap_or_default();
                Ok(Self {
                    items: RefCell::new(items),
                    expected_type: check_type.then(|| expected.value_type()),
                })
            }
        }
    }

    /// Drain a single-pass producer
    pub fn from_once<I>(iter: I, check_type: bool) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        Self {
            items: RefCell::new(iter.into_iter().collect()),
            expected_type: check_type.then_some(ValueType::Generator),
        }
    }

    /// Ad hoc list of discrete elements, never type-checked
    pub fn from_elements(elements: Vec<Value>) -> Self {
        Self {
            items: RefCell::new(elements),
            expected_type: None,
        }
    }

    fn from_expected(expected: Expected, check_type: bool) -> Result<Self> {
        match expected {
            Expected::Value(value) => Self::new(value, check_type),
            Expected::OneShot(iter) => Ok(Self::from_once(iter, check_type)),
        }
    }

    /// Recorded container type, or `None` when the type is not checked
    pub fn expected_type(&self) -> Option<ValueType> {
        self.expected_type
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    /// Membership by ambient equality
    pub fn contains(&self, value: &Value) -> bool {
        self.items.borrow().iter().any(|item| item == value)
    }

    /// Items in current order
    pub fn items(&self) -> Ref<'_, [Value]> {
        Ref::map(self.items.borrow(), Vec::as_slice)
    }

    pub fn to_vec(&self) -> Vec<Value> {
        self.items.borrow().clone()
    }

    /// Order-insensitive equality against `actual`
    ///
    /// A non-iterable `actual` falls back to plain equality with the items
    /// as a list. On success the items are reordered to follow `actual`.
    pub fn equals(&self, actual: &Value) -> bool {
        if let Value::Unordered(other) = actual {
            return self == other;
        }
        if !self.type_matches(actual.value_type()) {
            return false;
        }
        if !actual.is_iterable() {
            return Value::List(self.to_vec()) == *actual;
        }
        actual
            .with_elements(|elements| self.match_against(elements))
            .unwrap_or(false)
    }

    /// Order-insensitive equality against a single-pass producer
    pub fn equals_once<I>(&self, actual: I) -> bool
    where
        I: IntoIterator<Item = Value>,
    {
        if !self.type_matches(ValueType::Generator) {
            return false;
        }
        let elements: Vec<Value> = actual.into_iter().collect();
        self.match_against(&elements)
    }

    /// Diff the items against `other`, then reorder the items to follow it
    ///
    /// The reorder happens whether or not the two sides are equal.
    pub fn compare_to(&self, other: &[Value]) -> Diff<Value> {
        let (matching, diff) = {
            let items = self.items.borrow();
            let matching = matcher::match_elements(items.as_slice(), other);
            let diff = matching.diff(items.as_slice(), other);
            (matching, diff)
        };
        self.apply(&matching);
        diff
    }

    fn type_matches(&self, actual: ValueType) -> bool {
        match self.expected_type {
            Some(expected) if expected != actual => {
                tracing::trace!(
                    op = "unordered_eq",
                    expected = expected.name(),
                    actual = actual.name(),
                    "type mismatch"
                );
                false
            }
            _ => true,
        }
    }

    fn match_against(&self, actual: &[Value]) -> bool {
        let matching = {
            let items = self.items.borrow();
            if items.len() != actual.len() {
                tracing::trace!(
                    op = "unordered_eq",
                    expected_len = items.len(),
                    actual_len = actual.len(),
                    "length mismatch"
                );
                return false;
            }
            matcher::match_elements(items.as_slice(), actual)
        };
        tracing::trace!(
            op = "unordered_eq",
            matched = matching.matched_count(),
            total = actual.len(),
        );
        if !matching.is_complete() {
            return false;
        }
        self.apply(&matching);
        true
    }

    fn apply(&self, matching: &Matching) {
        // Comparing a wrapper against itself holds a shared borrow here;
        // its order already matches, so the reorder is skipped.
        if let Ok(mut items) = self.items.try_borrow_mut() {
            let current = std::mem::take(&mut *items);
            *items = matching.apply(current);
        }
    }
}

impl fmt::Display for UnorderedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Value::List(self.to_vec()))
    }
}

impl PartialEq<Value> for UnorderedList {
    fn eq(&self, other: &Value) -> bool {
        self.equals(other)
    }
}

impl PartialEq<UnorderedList> for Value {
    fn eq(&self, other: &UnorderedList) -> bool {
        other.equals(self)
    }
}

/// Both sides' type checks apply, so the result does not depend on operand order
impl PartialEq for UnorderedList {
    fn eq(&self, other: &Self) -> bool {
        if !self.type_matches(ValueType::Unordered) || !other.type_matches(ValueType::Unordered) {
            return false;
        }
        let elements = other.to_vec();
        self.match_against(&elements)
    }
}

impl<'a> IntoIterator for &'a UnorderedList {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.to_vec().into_iter()
    }
}

/// Build a wrapper from one iterable or several discrete elements
///
/// With exactly one argument, that argument is the expected collection:
/// mappings and non-iterables are rejected, and `check_type` defaults to
/// on, except for a one-shot producer where it defaults to off. With zero
/// or several arguments, they become an ad hoc list and the type is never
/// checked. A one-shot producer among several arguments becomes a list
/// element holding everything it produced.
///
/// # Errors
///
/// `InvalidExpectedKind` when the single argument is a mapping or is not
/// iterable.
pub fn make(mut args: Vec<Expected>, check_type: Option<bool>) -> Result<UnorderedList> {
    let started = Instant::now();
    log_op_start!("unordered_make", args = args.len());

    let result = match args.pop() {
        Some(single) if args.is_empty() => {
            let check_type = check_type.unwrap_or(single.kind() != Kind::OneShotProducer);
            UnorderedList::from_expected(single, check_type)
        }
        last => {
            let elements = args
                .into_iter()
                .chain(last)
                .map(Expected::into_value)
                .collect();
            Ok(UnorderedList::from_elements(elements))
        }
    };

    let duration_ms = started.elapsed().as_millis() as u64;
    match &result {
        Ok(list) => {
            log_op_end!("unordered_make", duration_ms = duration_ms, len = list.len());
        }
        Err(err) => {
            log_op_error!("unordered_make", err.clone(), duration_ms = duration_ms);
        }
    }
    result
}

/// Wrap a single-pass producer; the type is not checked
pub fn unordered_once<I>(iter: I) -> UnorderedList
where
    I: IntoIterator<Item = Value>,
{
    UnorderedList::from_once(iter, false)
}

/// Build an [`UnorderedList`] from one iterable or several elements
///
/// Expands to [`make`] and returns its `Result`.
///
/// ```
/// use unordered_core::{unordered, Value};
///
/// let expected = unordered!(1, 2, 3).unwrap();
/// assert!(expected == Value::list([3, 1, 2]));
///
/// let strict = unordered!(Value::list([1]); check_type = false).unwrap();
/// assert!(strict == Value::set([1]));
/// ```
#[macro_export]
macro_rules! unordered {
    ($value:expr; check_type = $check:expr) => {
        $crate::unordered::make(
            ::std::vec![$crate::unordered::Expected::from($crate::Value::from($value))],
            ::core::option::Option::Some($check),
        )
    };
    ($($value:expr),* $(,)?) => {
        $crate::unordered::make(
            ::std::vec![$($crate::unordered::Expected::from($crate::Value::from($value))),*],
            ::core::option::Option::None,
        )
    };
}
