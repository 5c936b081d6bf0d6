//! Value formatting services used by the report renderer.

use crate::report::model::DEFAULT_MAX_REPR_SIZE;
use crate::value::Value;

/// Formatting services the report renderer delegates to
///
/// The renderer decides which lines to emit; a backend decides how a value
/// or a pair of values looks.
pub trait ReportBackend {
    /// Render a value on one line, bounded in size
    fn safe_repr(&self, value: &Value) -> String;

    /// Explain how two values differ
    ///
    /// `verbosity` controls how much identical structure is shown: below 2,
    /// identical entries are summarized in a single line.
    fn compare_any(&self, left: &Value, right: &Value, verbosity: u8) -> Vec<String>;
}

/// Built-in backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultBackend {
    max_size: usize,
}

impl Default for DefaultBackend {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_REPR_SIZE)
    }
}

impl DefaultBackend {
    pub fn new(max_size: usize) -> Self {
        Self { max_size }
    }

    fn entry_repr(&self, key: &Value, value: &Value) -> String {
        self.safe_repr(&Value::Map(vec![(key.clone(), value.clone())]))
    }

    fn compare_maps(
        &self,
        left: &[(Value, Value)],
        right: &[(Value, Value)],
        verbosity: u8,
    ) -> Vec<String> {
        let mut same = Vec::new();
        let mut differing = Vec::new();
        let mut left_only = Vec::new();
        for (key, left_value) in left {
            match right.iter().find(|(k, _)| k == key) {
                Some((_, right_value)) if left_value == right_value => {
                    same.push((key.clone(), left_value.clone()))
                }
                Some((_, right_value)) => differing.push((key, left_value, right_value)),
                None => left_only.push((key.clone(), left_value.clone())),
            }
        }
        let right_only: Vec<(Value, Value)> = right
            .iter()
            .filter(|(k, _)| !left.iter().any(|(key, _)| key == k))
            .cloned()
            .collect();

        let mut lines = Vec::new();
        if !same.is_empty() {
            if verbosity < 2 {
                lines.push(format!(
                    "Omitting {} identical items, use -vv to show",
                    same.len()
                ));
            } else {
                lines.push("Common items:".to_string());
                lines.extend(same.iter().map(|(k, v)| self.entry_repr(k, v)));
            }
        }
        if !differing.is_empty() {
            lines.push("Differing items:".to_string());
            for (key, left_value, right_value) in differing {
                lines.push(format!(
                    "{} != {}",
                    self.entry_repr(key, left_value),
                    self.entry_repr(key, right_value)
                ));
            }
        }
        for (side, extra) in [("Left", left_only), ("Right", right_only)] {
            if extra.is_empty() {
                continue;
            }
            lines.push(format!(
                "{} contains {} more item{}:",
                side,
                extra.len(),
                if extra.len() == 1 { "" } else { "s" }
            ));
            lines.push(self.safe_repr(&Value::Map(extra)));
        }
        lines
    }

    fn compare_sequences(&self, left: &Value, right: &Value, verbosity: u8) -> Vec<String> {
        let (l, r) = match (left, right) {
            (Value::List(l), Value::List(r)) | (Value::Tuple(l), Value::Tuple(r)) => (l, r),
            _ => return Vec::new(),
        };

        let mut lines = Vec::new();
        if let Some((i, (a, b))) = l.iter().zip(r).enumerate().find(|(_, (a, b))| a != b) {
            lines.push(format!(
                "At index {} diff: {} != {}",
                i,
                self.safe_repr(a),
                self.safe_repr(b)
            ));
        }

        let (side, longer, shorter_len) = if l.len() > r.len() {
            ("Left", l, r.len())
        } else {
            ("Right", r, l.len())
        };
        let extra = longer.len() - shorter_len;
        if let Some(first) = longer.get(shorter_len) {
            if extra == 1 {
                lines.push(format!(
                    "{} contains one more item: {}",
                    side,
                    self.safe_repr(first)
                ));
            } else {
                lines.push(format!(
                    "{} contains {} more items, first extra item: {}",
                    side,
                    extra,
                    self.safe_repr(first)
                ));
            }
        }

        if verbosity >= 1 {
            lines.push("Full diff:".to_string());
            lines.push(format!("- {}", self.safe_repr(left)));
            lines.push(format!("+ {}", self.safe_repr(right)));
        }
        lines
    }

    fn compare_sets(&self, left: &[Value], right: &[Value]) -> Vec<String> {
        let mut lines = Vec::new();
        for (side, this, other) in [("left", left, right), ("right", right, left)] {
            let extra: Vec<&Value> = this.iter().filter(|v| !other.contains(v)).collect();
            if extra.is_empty() {
                continue;
            }
            lines.push(format!("Extra items in the {} set:", side));
            lines.extend(extra.into_iter().map(|v| self.safe_repr(v)));
        }
        lines
    }
}

impl ReportBackend for DefaultBackend {
    fn safe_repr(&self, value: &Value) -> String {
        saferepr(value, self.max_size)
    }

    fn compare_any(&self, left: &Value, right: &Value, verbosity: u8) -> Vec<String> {
        match (left, right) {
            (Value::Map(l), Value::Map(r)) => self.compare_maps(l, r, verbosity),
            (Value::List(_), Value::List(_)) | (Value::Tuple(_), Value::Tuple(_)) => {
                self.compare_sequences(left, right, verbosity)
            }
            (Value::Set(l), Value::Set(r)) => self.compare_sets(l, r),
            _ => vec![format!(
                "{} != {}",
                self.safe_repr(left),
                self.safe_repr(right)
            )],
        }
    }
}

/// One-line rendering of `value`, cut in the middle to at most `max_size` chars
pub fn saferepr(value: &Value, max_size: usize) -> String {
    truncate_middle(&value.to_string(), max_size)
}

fn truncate_middle(repr: &str, max_size: usize) -> String {
    let chars: Vec<char> = repr.chars().collect();
    if chars.len() <= max_size {
        return repr.to_string();
    }
    let keep = max_size.saturating_sub(3);
    let head = keep / 2;
    let tail = keep - head;
    let mut out: String = chars[..head].iter().collect();
    out.push_str("...");
    out.extend(&chars[chars.len() - tail..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_middle() {
        assert_eq!(truncate_middle("abcdef", 10), "abcdef");
        assert_eq!(truncate_middle("abcdefghij", 7), "ab...ij");
        assert_eq!(truncate_middle("abcdefghij", 2), "...");
    }

    #[test]
    fn test_map_diff_summarizes_identical_items() {
        let backend = DefaultBackend::default();
        let left = Value::map([("a", 1), ("b", 2)]);
        let right = Value::map([("b", 2), ("a", 3)]);
        assert_eq!(
            backend.compare_any(&left, &right, 0),
            vec![
                "Omitting 1 identical items, use -vv to show",
                "Differing items:",
                r#"{"a": 1} != {"a": 3}"#,
            ]
        );
    }

    #[test]
    fn test_map_diff_verbose_lists_common_items() {
        let backend = DefaultBackend::default();
        let left = Value::map([("a", 1), ("b", 2), ("c", 5)]);
        let right = Value::map([("a", 1), ("b", 3), ("d", 6)]);
        assert_eq!(
            backend.compare_any(&left, &right, 2),
            vec![
                "Common items:",
                r#"{"a": 1}"#,
                "Differing items:",
                r#"{"b": 2} != {"b": 3}"#,
                "Left contains 1 more item:",
                r#"{"c": 5}"#,
                "Right contains 1 more item:",
                r#"{"d": 6}"#,
            ]
        );
    }

    #[test]
    fn test_sequence_diff() {
        let backend = DefaultBackend::default();
        let lines = backend.compare_any(&Value::list([1, 2, 3, 4]), &Value::list([1, 5]), 0);
        assert_eq!(
            lines,
            vec![
                "At index 1 diff: 2 != 5",
                "Left contains 2 more items, first extra item: 3",
            ]
        );
    }

    #[test]
    fn test_sequence_diff_verbose() {
        let backend = DefaultBackend::default();
        let lines = backend.compare_any(&Value::tuple([1]), &Value::tuple([1, 2]), 1);
        assert_eq!(
            lines,
            vec![
                "Right contains one more item: 2",
                "Full diff:",
                "- (1,)",
                "+ (1, 2)",
            ]
        );
    }

    #[test]
    fn test_fallback_diff() {
        let backend = DefaultBackend::default();
        let lines = backend.compare_any(&Value::from("x"), &Value::Int(1), 0);
        assert_eq!(lines, vec![r#""x" != 1"#]);
    }
}
