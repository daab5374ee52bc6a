mod errors;
mod logging;
mod parser;
mod runner;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use lsre_core::{Format, RuleError};

/// Output format for validation results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Print results to standard output (human-readable)
    Stdout,
    /// Output results in JSON format
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "lsre",
    version,
    about = "lsre - lexical format validators",
    long_about = "lsre checks strings against common lexical formats (email, URL, IPv4/IPv6, \
                  phone number, credit card, ISO date, time, hex color, UUID, slug and strong \
                  password).\n\n\
                  Example usage:\n  \
                  lsre check email user@example.com\n  \
                  lsre --output json batch values.json --format uuid"
)]
pub struct Args {
    /// Path to the TOML configuration file (logging and batch defaults)
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Output format for validation results
    #[arg(short, long, value_enum, default_value = "stdout", global = true)]
    pub output: OutputFormat,

    /// Enable debug logging and detailed error chains
    #[arg(short, long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the supported formats
    List,
    /// Check values against one format
    Check {
        /// Format name, e.g. `email` or `is_email`
        #[arg(value_parser = parse_format)]
        format: Format,
        /// Values to check; read from stdin, one per line, when omitted
        values: Vec<String>,
    },
    /// Run formats over a JSON file holding an array of values
    Batch {
        /// JSON file containing an array of arbitrary values
        #[arg(value_name = "FILE")]
        input: PathBuf,
        /// Formats to run; defaults to `batch.formats` from the config, then to all formats
        #[arg(short, long = "format", value_parser = parse_format)]
        formats: Vec<Format>,
    },
}

fn parse_format(s: &str) -> Result<Format, RuleError> {
    s.parse()
}

fn main() {
    let args = Args::parse();
    let debug = args.debug;

    match runner::run(args) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            if debug {
                eprintln!("Error: {:?}", err);
            } else {
                eprintln!("Error: {:#}", err);
                eprintln!("\nHint: Run with --debug flag for detailed error chains");
            }
            std::process::exit(2);
        }
    }
}
