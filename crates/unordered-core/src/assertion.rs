//! Assertion macros built on the report hook.

use crate::report::{assertrepr_compare, CompareOp, ReportConfig};
use crate::value::Value;

/// Panic message for a failed `left == right`
///
/// Uses the report hook when it applies, and a plain two-value message
/// when it declines.
pub fn failure_message(config: &ReportConfig, left: &Value, right: &Value) -> String {
    let lines = assertrepr_compare(config, CompareOp::Eq, left, right)
        .unwrap_or_else(|| vec![format!("left: {}", left), format!("right: {}", right)]);
    let mut message = String::from("assertion `left == right` failed");
    for line in lines {
        message.push_str("\n  ");
        message.push_str(&line);
    }
    message
}

/// Assert that two values are equal, explaining unordered mismatches
///
/// Both operands are converted into [`Value`](crate::Value). The report
/// verbosity comes from `UNORDERED_VERBOSITY` unless a
/// [`ReportConfig`](crate::report::ReportConfig) is passed.
///
/// ```
/// use unordered_core::{assert_unordered_eq, unordered, Value};
///
/// assert_unordered_eq!(unordered!(1, 2, 3).unwrap(), Value::list([3, 1, 2]));
/// ```
///
/// ```should_panic
/// use unordered_core::{assert_unordered_eq, unordered, Value};
///
/// // panics with "Extra items in the left sequence:"
/// assert_unordered_eq!(unordered!(1, 2, 3, 3).unwrap(), Value::list([1, 2, 3]));
/// ```
#[macro_export]
macro_rules! assert_unordered_eq {
    ($left:expr, $right:expr $(,)?) => {
        $crate::assert_unordered_eq!($left, $right, &$crate::report::ReportConfig::from_env())
    };
    ($left:expr, $right:expr, $config:expr $(,)?) => {{
        let left: $crate::Value = ::core::convert::Into::into($left);
        let right: $crate::Value = ::core::convert::Into::into($right);
        if left != right {
            ::core::panic!(
                "{}",
                $crate::assertion::failure_message($config, &left, &right)
            );
        }
    }};
}
