//! Defines the command-line options understood by a run.
//!
//! This module uses the `clap` crate with its "derive" feature. Options are
//! read left to right until the first token that does not start with `-`
//! (or an explicit `--`); every remaining token is a selection pattern.

use std::time::{SystemTime, UNIX_EPOCH};

use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{CommandFactory, Parser, ValueEnum};

use crate::errors::HarnessError;

const SPECIFICATION_HELP: &str = "\
Test specification:
  \"*\"      all tests, unless excluded
  empty    all tests, unless tagged [hide] or [.]
  \"text\"   select tests that contain text (case insensitive)
  \"!text\"  omit tests that contain text (case insensitive)
  (with regular-expression matching enabled, text is a regular expression)";

/// Parsed run options plus the selection patterns that follow them.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(
    name = "test",
    override_usage = "test [options] [test-spec ...]",
    no_binary_name = true,
    disable_help_flag = true,
    args_override_self = true,
    after_help = SPECIFICATION_HELP
)]
pub struct Options {
    /// this help message
    #[arg(short, long)]
    pub help: bool,
    /// abort at first failure
    #[arg(short, long)]
    pub abort: bool,
    /// count selected tests
    #[arg(short, long)]
    pub count: bool,
    /// list selected tests
    #[arg(short, long)]
    pub list: bool,
    /// also report passing tests
    #[arg(short = 'p', long = "pass")]
    pub report_passing: bool,
    /// list duration of selected tests
    #[cfg_attr(feature = "timing", arg(short, long))]
    #[cfg_attr(not(feature = "timing"), arg(skip))]
    pub time: bool,
    /// test order
    #[arg(long, value_enum, default_value_t = Order::Declared)]
    pub order: Order,
    /// random generator seed: a number or 'time'
    #[arg(long = "random-seed", value_parser = parse_seed, default_value = "0")]
    pub seed: Seed,
    /// selection patterns, last one wins
    #[arg(value_name = "TEST-SPEC", trailing_var_arg = true, num_args = 1..)]
    pub patterns: Vec<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            help: false,
            abort: false,
            count: false,
            list: false,
            report_passing: false,
            time: false,
            order: Order::Declared,
            seed: Seed::Value(0),
            patterns: Vec::new(),
        }
    }
}

impl Options {
    /// Parses run arguments (without the program name).
    pub fn from_args<I, S>(args: I) -> Result<Self, HarnessError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Options::try_parse_from(args.into_iter().map(|arg| arg.as_ref().to_string()))
            .map_err(|e| HarnessError::usage(summarise(&e)))
    }

    /// Usage text for `-h|--help`.
    pub fn usage() -> String {
        Options::command().render_help().to_string()
    }
}

/// Order in which selected tests run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Order {
    /// use source code test order
    #[default]
    Declared,
    /// use lexical sort test order
    Lexical,
    /// use random test order
    Random,
}

/// Seed for `--order=random`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seed {
    Value(u64),
    /// Seconds since the Unix epoch, read when the run starts.
    Time,
}

impl Seed {
    pub fn resolve(&self) -> u64 {
        match self {
            Seed::Value(seed) => *seed,
            Seed::Time => SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|elapsed| elapsed.as_secs())
                .unwrap_or_default(),
        }
    }
}

fn parse_seed(arg: &str) -> Result<Seed, String> {
    if arg == "time" {
        return Ok(Seed::Time);
    }
    if !arg.is_empty() && arg.bytes().all(|b| b.is_ascii_digit()) {
        return arg.parse().map(Seed::Value).map_err(|e| format!("{e}"));
    }
    Err(format!(
        "expecting 'time' or number with option '--random-seed', got '{arg}'"
    ))
}

/// First line of a clap error, without clap's own `error: ` prefix.
///
/// Unknown options are reported as `unrecognised option '<arg>'`.
fn summarise(error: &clap::Error) -> String {
    if error.kind() == ErrorKind::UnknownArgument {
        if let Some(ContextValue::String(arg)) = error.get(ContextKind::InvalidArg) {
            return format!("unrecognised option '{arg}'");
        }
    }
    let rendered = error.to_string();
    let first = rendered.lines().next().unwrap_or_default();
    first.strip_prefix("error: ").unwrap_or(first).to_string()
}
