//! Report rendering.
//!
//! The core entry point is [`assertrepr_compare`], which turns a failed
//! `==` between a wrapper and another value into explanation lines.

use crate::matcher::{self, Diff};
use crate::report::backend::{DefaultBackend, ReportBackend};
use crate::report::model::{CompareOp, ReportConfig};
use crate::value::{Value, ValueType};

/// Multiset diff of two values coerced to sequences
///
/// Each element of `left`, in order, consumes the first equal element still
/// unconsumed in `right`. Returns `None` when either side is not iterable.
pub fn unordered_diff(left: &Value, right: &Value) -> Option<Diff<Value>> {
    left.with_elements(|l| {
        right.with_elements(|r| matcher::match_elements(r, l).diff(r, l).swap())
    })
    .flatten()
}

/// Type reported for an operand: a wrapper's recorded type, or the value's own
fn reported_type(value: &Value) -> Option<ValueType> {
    match value {
        Value::Unordered(list) => list.expected_type(),
        other => Some(other.value_type()),
    }
}

/// Explain a failed comparison using the built-in [`DefaultBackend`]
///
/// Returns `None` when `op` is not `==` or neither operand is a wrapper.
pub fn assertrepr_compare(
    config: &ReportConfig,
    op: CompareOp,
    left: &Value,
    right: &Value,
) -> Option<Vec<String>> {
    let backend = DefaultBackend::new(config.max_repr_size);
    assertrepr_compare_with(&backend, config, op, left, right)
}

/// Explain a failed comparison, formatting values through `backend`
pub fn assertrepr_compare_with<B: ReportBackend + ?Sized>(
    backend: &B,
    config: &ReportConfig,
    op: CompareOp,
    left: &Value,
    right: &Value,
) -> Option<Vec<String>> {
    if op != CompareOp::Eq || !(left.is_unordered() || right.is_unordered()) {
        tracing::trace!(op = "assertrepr_compare", compare_op = %op, "declined");
        return None;
    }

    let mut lines = vec![format!(
        "{} {} {}",
        backend.safe_repr(left),
        op,
        backend.safe_repr(right)
    )];

    if let (Some(left_type), Some(right_type)) = (reported_type(left), reported_type(right)) {
        if left_type != right_type {
            lines.push("Type mismatch:".to_string());
            lines.push(format!("{} != {}", left_type, right_type));
        }
    }

    if let Some(diff) = unordered_diff(left, right) {
        match (diff.extra_left.as_slice(), diff.extra_right.as_slice()) {
            ([replaced], [replacement]) => {
                lines.push("One item replaced:".to_string());
                lines.extend(backend.compare_any(replaced, replacement, config.verbosity));
            }
            (extra_left, extra_right) => {
                if !extra_left.is_empty() {
                    lines.push("Extra items in the left sequence:".to_string());
                    lines.extend(extra_left.iter().map(|item| backend.safe_repr(item)));
                }
                if !extra_right.is_empty() {
                    lines.push("Extra items in the right sequence:".to_string());
                    lines.extend(extra_right.iter().map(|item| backend.safe_repr(item)));
                }
            }
        }
    }

    tracing::debug!(
        op = "assertrepr_compare",
        verbosity = config.verbosity,
        lines = lines.len(),
        "rendered report"
    );
    Some(lines)
}
