use thiserror::Error;

use crate::value::Kind;

/// Result type alias using UnorderedError
pub type Result<T> = std::result::Result<T, UnorderedError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing, and CLI output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Construction
    /// Expected value is not iterable, or is a mapping
    InvalidExpectedKind,

    // Integration/IO
    Io,
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidExpectedKind => "ERR_INVALID_EXPECTED_KIND",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification kind for programmatic handling plus optional
/// context (operation, file path) for debugging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    path: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            path: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add file path context
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the file path context, if any
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Errors raised while building an unordered comparison
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UnorderedError {
    /// The expected value cannot be compared without regard to order
    #[error("cannot make unordered comparisons to {}: {repr}", describe(.kind))]
    InvalidExpectedKind { kind: Kind, repr: String },
}

fn describe(kind: &Kind) -> &'static str {
    match kind {
        Kind::Mapping => "mapping",
        _ => "non-iterable",
    }
}

impl UnorderedError {
    /// Capability class of the rejected value
    pub fn kind(&self) -> Kind {
        match self {
            UnorderedError::InvalidExpectedKind { kind, .. } => *kind,
        }
    }
}

impl From<UnorderedError> for ExError {
    fn from(err: UnorderedError) -> Self {
        match &err {
            UnorderedError::InvalidExpectedKind { .. } => {
                ExError::new(ExErrorKind::InvalidExpectedKind).with_message(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping_message() {
        let err = UnorderedError::InvalidExpectedKind {
            kind: Kind::Mapping,
            repr: "{1: 2}".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "cannot make unordered comparisons to mapping: {1: 2}"
        );
    }

    #[test]
    fn test_non_iterable_message() {
        let err = UnorderedError::InvalidExpectedKind {
            kind: Kind::Scalar,
            repr: "42".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "cannot make unordered comparisons to non-iterable: 42"
        );
    }

    #[test]
    fn test_conversion_keeps_message() {
        let err = UnorderedError::InvalidExpectedKind {
            kind: Kind::Other,
            repr: "ANY".to_string(),
        };
        let ex: ExError = err.into();
        assert_eq!(ex.kind(), ExErrorKind::InvalidExpectedKind);
        assert_eq!(ex.code(), "ERR_INVALID_EXPECTED_KIND");
        assert!(ex.message().contains("non-iterable: ANY"));
    }

    #[test]
    fn test_display_includes_context() {
        let ex = ExError::new(ExErrorKind::Io)
            .with_op("load_fixture")
            .with_path("a.json")
            .with_message("not found");
        assert_eq!(
            ex.to_string(),
            "[ERR_IO] in operation 'load_fixture': not found (path: a.json)"
        );
    }
}
