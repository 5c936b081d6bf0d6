//! Unordered - order-insensitive equality for test assertions
//!
//! This crate lets a test state "this collection should equal that
//! collection, ignoring element order" and explains the difference when it
//! does not:
//! - A dynamic [`Value`] model for fixtures, with `serde_json` conversion
//! - Multiset matching with a deterministic leftmost-first tie-break ([`matcher`])
//! - The [`UnorderedList`] wrapper, which reorders itself to follow the
//!   actual value after a successful comparison
//! - Recursive wrapping of nested fixtures ([`unordered_deep`])
//! - Failure reports for the assertion machinery ([`report`], [`assert_unordered_eq!`])
//!
//! ```
//! use serde_json::json;
//! use unordered_core::{assert_unordered_eq, unordered, Value};
//!
//! let expected = unordered!(1, 2, Value::map([("a", unordered!(4, 5, 6).unwrap())])).unwrap();
//! assert_unordered_eq!(expected, json!([{"a": [6, 5, 4]}, 2, 1]));
//! ```

pub mod assertion;
pub mod deep;
pub mod errors;
pub mod logging_facility;
pub mod matcher;
pub mod report;
pub mod unordered;
pub mod value;

#[doc(hidden)]
pub use tracing;

// Re-export commonly used types
pub use deep::unordered_deep;
pub use errors::{ExError, ExErrorKind, Result, UnorderedError};
pub use matcher::Diff;
pub use unordered::{make, unordered_once, Expected, UnorderedList};
pub use value::{Kind, Value, ValueType};
