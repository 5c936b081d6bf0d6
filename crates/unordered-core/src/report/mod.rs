//! Failure reports for unordered comparisons.
//!
//! When an assertion comparing a wrapper fails, the assertion machinery
//! asks [`assertrepr_compare`] for explanation lines.
//!
//! ## Entry point
//!
//! ```
//! use unordered_core::report::{assertrepr_compare, CompareOp, ReportConfig};
//! use unordered_core::{unordered, Value};
//!
//! let left = Value::from(unordered!(1, 2, 3, 3).unwrap());
//! let right = Value::list([1, 2, 3]);
//! let lines = assertrepr_compare(&ReportConfig::default(), CompareOp::Eq, &left, &right);
//! assert_eq!(
//!     lines.unwrap()[1..],
//!     ["Extra items in the left sequence:".to_string(), "3".to_string()]
//! );
//! ```
//!
//! ## Guarantees
//!
//! - The hook declines (`None`) unless the operator is `==` and at least
//!   one operand is a wrapper, so the caller can fall back to a generic
//!   message.
//! - Rendering never panics; operands that cannot be iterated produce a
//!   report without the item-level section.
//! - Formatting of individual values is delegated to a [`ReportBackend`].

pub mod backend;
pub mod engine;
pub mod model;

pub use backend::{DefaultBackend, ReportBackend};
pub use engine::{assertrepr_compare, assertrepr_compare_with, unordered_diff};
pub use model::{CompareOp, ReportConfig};
