//! Unordered CLI
//!
//! Compares JSON fixtures without regard to element order.

use clap::{Parser, Subcommand, ValueEnum};
use unordered_core::logging_facility::{init, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "unordered")]
#[command(about = "Order-insensitive comparison of JSON fixtures", long_about = None)]
struct Cli {
    /// Log output on stderr
    #[arg(long, value_enum, global = true, default_value_t = LogFormat::Off)]
    log: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Off,
    Pretty,
    Json,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Compare an expected fixture against an actual one
    Compare(commands::compare::CompareArgs),
}

fn main() {
    let cli = Cli::parse();

    match cli.log {
        LogFormat::Off => {}
        LogFormat::Pretty => init(Profile::Development),
        LogFormat::Json => init(Profile::Production),
    }

    let result = match cli.command {
        Commands::Compare(args) => commands::compare::execute(args),
    };

    match result {
        Ok(commands::Outcome::Equal) => {}
        Ok(commands::Outcome::Different) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    }
}
