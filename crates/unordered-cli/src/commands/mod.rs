pub mod compare;

/// Result of a successful command run, mapped to the exit status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Equal,
    Different,
}
