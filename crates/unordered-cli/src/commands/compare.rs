//! Compare command
//!
//! Usage: unordered compare <EXPECTED> <ACTUAL> [--no-check-type] [--deep] [-v...] [--format <FORMAT>]

use super::Outcome;
use clap::{ArgAction, Args, ValueEnum};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Instant;
use unordered_core::errors::{ExError, ExErrorKind};
use unordered_core::report::{assertrepr_compare, unordered_diff, CompareOp, ReportConfig};
use unordered_core::{log_op_end, log_op_error, log_op_start};
use unordered_core::{make, unordered_deep, Expected, Value};

#[derive(Debug, Args)]
pub struct CompareArgs {
    /// Expected fixture (JSON file)
    pub expected: PathBuf,

    /// Actual fixture (JSON file)
    pub actual: PathBuf,

    /// Accept an actual value of a different container type
    #[arg(long)]
    pub no_check_type: bool,

    /// Make nested lists order-insensitive too
    #[arg(long)]
    pub deep: bool,

    /// Show more of the identical structure in reports (-v, -vv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Serialize)]
struct CompareReport {
    equal: bool,
    extra_left: Vec<Value>,
    extra_right: Vec<Value>,
    report: Vec<String>,
}

/// Execute compare command
pub fn execute(args: CompareArgs) -> Result<Outcome, ExError> {
    let started = Instant::now();
    log_op_start!(
        "compare",
        expected = %args.expected.display(),
        actual = %args.actual.display()
    );

    let result = run(&args);

    let duration_ms = started.elapsed().as_millis() as u64;
    match &result {
        Ok(outcome) => {
            log_op_end!("compare", duration_ms = duration_ms, outcome = ?outcome);
        }
        Err(err) => {
            log_op_error!("compare", err.clone(), duration_ms = duration_ms);
        }
    }
    result
}

fn run(args: &CompareArgs) -> Result<Outcome, ExError> {
    let expected = load_fixture(&args.expected)?;
    let actual = load_fixture(&args.actual)?;

    let expected = if args.deep {
        unordered_deep(expected)
    } else {
        Value::from(make(vec![Expected::from(expected)], Some(!args.no_check_type))?)
    };

    let equal = expected == actual;
    let config = ReportConfig::default().with_verbosity(args.verbose);
    let report = if equal {
        Vec::new()
    } else {
        assertrepr_compare(&config, CompareOp::Eq, &expected, &actual)
            .unwrap_or_else(|| vec![format!("{} != {}", expected, actual)])
    };

    match args.format {
        OutputFormat::Text if equal => println!("equal"),
        OutputFormat::Text => {
            for line in &report {
                println!("{}", line);
            }
        }
        OutputFormat::Json => {
            let diff = unordered_diff(&expected, &actual);
            let (extra_left, extra_right) = diff
                .map(|d| (d.extra_left, d.extra_right))
                .unwrap_or_default();
            let out = CompareReport {
                equal,
                extra_left,
                extra_right,
                report,
            };
            let rendered = serde_json::to_string_pretty(&out).map_err(|e| {
                ExError::new(ExErrorKind::Serialization)
                    .with_op("compare")
                    .with_message(e.to_string())
            })?;
            println!("{}", rendered);
        }
    }

    Ok(if equal {
        Outcome::Equal
    } else {
        Outcome::Different
    })
}

/// Read a JSON fixture into a [`Value`]
fn load_fixture(path: &Path) -> Result<Value, ExError> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        ExError::new(ExErrorKind::Io)
            .with_op("load_fixture")
            .with_path(path.display().to_string())
            .with_message(e.to_string())
    })?;
    let json: serde_json::Value = serde_json::from_str(&text).map_err(|e| {
        ExError::new(ExErrorKind::Serialization)
            .with_op("load_fixture")
            .with_path(path.display().to_string())
            .with_message(format!("fixture is not valid JSON: {}", e))
    })?;
    Ok(Value::from(json))
}
