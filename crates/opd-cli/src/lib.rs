//! OPD command-line boundary
//!
//! Turns command-line arguments into raw values, adapts them through the
//! registry and hands the operands to the dispatcher. The binary in
//! `main.rs` is a thin shell around these functions.

#![warn(missing_docs)]
#![warn(unreachable_pub)]

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use opd_capability::Number;
use opd_dispatch::increment;
use opd_registry::{AdaptError, AdapterConfig, OperandRegistry, RawValue, RegistryBuilder, RegistryError};
use serde::Serialize;
use std::path::PathBuf;

/// Result of incrementing one command-line value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome {
    /// Argument as given
    pub input: String,
    /// Variant the argument was adapted into
    pub variant: String,
    /// Incremented value
    pub result: Number,
}

/// Everything a command produced
///
/// The binary prints `stdout` as is, reports each failure on stderr and exits
/// non-zero unless [`Report::success`] holds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    /// Text destined for standard output
    pub stdout: String,
    /// One message per value that could not be incremented
    pub failures: Vec<String>,
}

impl Report {
    /// Check that no value failed
    #[inline]
    #[must_use]
    pub fn success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Command-line definition
#[must_use]
pub fn command() -> Command {
    Command::new("opd")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Adapt raw values into operands and increment them")
        .subcommand_required(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("TOML file with adapter configuration"),
        )
        .subcommand(
            Command::new("increment")
                .about("Increment each value by one")
                .allow_negative_numbers(true)
                .arg(
                    Arg::new("values")
                        .required(true)
                        .num_args(1..)
                        .help("Numbers or numeric text"),
                )
                .arg(
                    Arg::new("variant")
                        .long("variant")
                        .help("Adapt every value into this variant instead of the default"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output as JSON"),
                ),
        )
        .subcommand(Command::new("variants").about("List registered operand variants"))
}

/// Registry with built-in variants and the rational extension
///
/// # Errors
/// Returns [`RegistryError`] if a variant tag collides
pub fn build_registry(config: AdapterConfig) -> Result<OperandRegistry, RegistryError> {
    let mut builder = RegistryBuilder::with_defaults().with_config(config);
    opd_rational::register(&mut builder)?;
    Ok(builder.build())
}

/// Classify a command-line argument
///
/// Anything that reads as a JSON number is numeric; everything else is text.
#[must_use]
pub fn parse_raw(arg: &str) -> RawValue {
    serde_json::from_str::<Number>(arg).map_or_else(|_| RawValue::from(arg), RawValue::Number)
}

/// Adapt `arg` and increment it
///
/// `variant` overrides the configured default for the argument's shape.
///
/// # Errors
/// Returns [`AdaptError`] if the argument cannot become an operand
pub fn increment_arg(
    registry: &OperandRegistry,
    variant: Option<&str>,
    arg: &str,
) -> Result<Outcome, AdaptError> {
    let raw = parse_raw(arg);
    let tag = variant.unwrap_or_else(|| registry.config().variant_for(raw.kind()));
    let operand = registry.adapt(tag, &raw)?;

    Ok(Outcome {
        input: arg.to_string(),
        variant: tag.to_string(),
        result: increment(operand.as_ref()),
    })
}

/// Run a parsed command against `registry`
///
/// Values that fail are recorded in [`Report::failures`]; the rest are still
/// incremented and reported.
///
/// # Errors
/// Returns [`serde_json::Error`] if `--json` output cannot be rendered
pub fn execute(
    matches: &ArgMatches,
    registry: &OperandRegistry,
) -> Result<Report, serde_json::Error> {
    let mut report = Report::default();

    match matches.subcommand() {
        Some(("increment", args)) => {
            let variant = args.get_one::<String>("variant").map(String::as_str);
            let mut outcomes = Vec::new();

            for value in args.get_many::<String>("values").into_iter().flatten() {
                match increment_arg(registry, variant, value) {
                    Ok(outcome) => outcomes.push(outcome),
                    Err(err) => report.failures.push(format!("cannot increment {value:?}: {err}")),
                }
            }

            if args.get_flag("json") {
                report.stdout = serde_json::to_string_pretty(&outcomes)?;
                report.stdout.push('\n');
            } else {
                for outcome in &outcomes {
                    report.stdout.push_str(&format!("{} -> {}\n", outcome.input, outcome.result));
                }
            }
        }
        Some(("variants", _)) => {
            for tag in registry.tags() {
                report.stdout.push_str(tag);
                report.stdout.push('\n');
            }
        }
        Some((name, _)) => report.failures.push(format!("unknown command {name:?}")),
        None => report.failures.push("no command given".to_string()),
    }

    Ok(report)
}
