use std::{
    fs,
    io::{self, BufRead},
    path::Path,
};

use anyhow::{Context, Result};
use lsre_core::{Anchoring, Format, Validator};
use lsre_reports::{CheckRecord, JsonFormatter, Reporter, StdOutFormatter};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::{
    Args, Command, OutputFormat,
    errors::CliError,
    logging,
    parser::{Config, parse_config},
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Runs the parsed command. `Ok(false)` means at least one value failed.
pub fn run(args: Args) -> Result<bool> {
    let config = parse_config(args.config.as_deref())?;
    logging::init(&config.logger, args.debug)?;
    debug!(?config, "loaded configuration");

    if let Command::List = args.command {
        print_formats(args.output)?;
        return Ok(true);
    }

    match args.output {
        OutputFormat::Stdout => {
            let mut reporter = StdOutFormatter::new(VERSION.to_string());
            execute(&args.command, &config, &mut reporter)
        }
        OutputFormat::Json => {
            let mut reporter = JsonFormatter::new(VERSION.to_string());
            let passed = execute(&args.command, &config, &mut reporter)?;
            println!("{}", reporter.to_json()?);
            Ok(passed)
        }
    }
}

pub fn execute<R: Reporter>(command: &Command, config: &Config, reporter: &mut R) -> Result<bool> {
    match command {
        Command::List => Ok(true),
        Command::Check { format, values } => {
            let values = if values.is_empty() {
                read_lines(io::stdin().lock())?
            } else {
                values.clone()
            };
            check_values(*format, &values, reporter)
        }
        Command::Batch { input, formats } => {
            let values = read_batch_input(input)?;
            let formats = if formats.is_empty() {
                config.batch.resolve_formats()?
            } else {
                formats.clone()
            };
            run_batch(formats, &values, reporter)
        }
    }
}

fn check_values<R: Reporter>(format: Format, values: &[String], reporter: &mut R) -> Result<bool> {
    reporter.on_start();

    let mut passed = 0;
    for value in values {
        let matched = format.validate(value.as_str())?;
        if matched {
            passed += 1;
        }
        reporter.on_check(CheckRecord::new(format, value, matched));
    }

    let failed = values.len() - passed;
    reporter.on_summary(passed, failed);
    Ok(failed == 0)
}

fn run_batch<R: Reporter>(formats: Vec<Format>, values: &[Value], reporter: &mut R) -> Result<bool> {
    let validator = Validator::with_formats(formats);
    reporter.on_start();

    let results = validator.validate_all(values);
    for result in &results {
        reporter.on_batch_result(result);
    }

    let passed = results.iter().filter(|r| r.is_passed()).count();
    let failed = results.len() - passed;
    reporter.on_summary(passed, failed);
    Ok(failed == 0)
}

pub fn read_lines(reader: impl BufRead) -> Result<Vec<String>> {
    let lines = reader
        .lines()
        .collect::<io::Result<Vec<_>>>()
        .context("Failed to read values from stdin")?;
    Ok(lines)
}

pub fn read_batch_input(path: &Path) -> Result<Vec<Value>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read batch input: {}", path.display()))?;
    let value: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse batch input as JSON: {}", path.display()))?;

    match value {
        Value::Array(values) => Ok(values),
        other => Err(CliError::InputNotArray {
            path: path.display().to_string(),
            found: json_type_name(&other),
        }
        .into()),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[derive(Serialize)]
struct FormatInfo {
    name: &'static str,
    description: &'static str,
    anchoring: Anchoring,
    case_sensitive: bool,
}

fn format_infos() -> Vec<FormatInfo> {
    Format::ALL
        .into_iter()
        .map(|format| FormatInfo {
            name: format.name(),
            description: format.description(),
            anchoring: format.anchoring(),
            case_sensitive: format.is_case_sensitive(),
        })
        .collect()
}

fn print_formats(output: OutputFormat) -> Result<()> {
    let infos = format_infos();
    match output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&infos)?),
        OutputFormat::Stdout => {
            for info in infos {
                let anchoring = match info.anchoring {
                    Anchoring::Full => "full",
                    Anchoring::Prefix => "prefix",
                };
                let case = if info.case_sensitive {
                    "case-sensitive"
                } else {
                    "case-insensitive"
                };
                println!(
                    "{:<16} {:<7} {:<17} {}",
                    info.name, anchoring, case, info.description
                );
            }
        }
    }
    Ok(())
}
