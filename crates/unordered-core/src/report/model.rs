//! Report inputs: the comparison operator and rendering configuration.

use std::fmt;

/// Environment variable holding the report verbosity (like `-v`, `-vv`)
pub const VERBOSITY_ENV: &str = "UNORDERED_VERBOSITY";

/// Default truncation width of a single rendered value
pub const DEFAULT_MAX_REPR_SIZE: usize = 240;

/// Comparison operator of the failing assertion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    In,
    NotIn,
}

impl CompareOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            CompareOp::Eq => "==",
            CompareOp::Ne => "!=",
            CompareOp::Lt => "<",
            CompareOp::Le => "<=",
            CompareOp::Gt => ">",
            CompareOp::Ge => ">=",
            CompareOp::In => "in",
            CompareOp::NotIn => "not in",
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Rendering configuration handed to the report hook
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportConfig {
    /// 0 = default, 1 = `-v`, 2 and above = `-vv`
    pub verbosity: u8,
    pub max_repr_size: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            verbosity: 0,
            max_repr_size: DEFAULT_MAX_REPR_SIZE,
        }
    }
}

impl ReportConfig {
    /// Default configuration with verbosity taken from `UNORDERED_VERBOSITY`
    pub fn from_env() -> Self {
        Self::default().with_verbosity(parse_verbosity(std::env::var(VERBOSITY_ENV).ok()))
    }

    pub fn with_verbosity(mut self, verbosity: u8) -> Self {
        self.verbosity = verbosity;
        self
    }

    pub fn with_max_repr_size(mut self, max_repr_size: usize) -> Self {
        self.max_repr_size = max_repr_size;
        self
    }
}

/// Unset or unparsable values mean 0
fn parse_verbosity(raw: Option<String>) -> u8 {
    raw.and_then(|s| s.trim().parse().ok()).unwrap_or(0)
}
