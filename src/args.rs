//! Code to parse the command line using `clap`, and definitions of the parsed
//! result

use clap::{Parser, ValueEnum};
use std::ffi::OsString;
use std::path::PathBuf;

use crate::styles::ColorChoice;

/// Returns the parsed command line, or the `clap` error describing what was
/// wrong with it.
pub fn parsed() -> Result<Args, clap::Error> {
    parse_from(std::env::args_os())
}

/// Parses `args`, whose first item is the program name. A command line is
/// valid if it names one operation and exactly two files.
pub fn parse_from<I, T>(args: I) -> Result<Args, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let parsed = CliArgs::try_parse_from(args)?;
    Ok(Args { op: parsed.op, first: parsed.file1, second: parsed.file2, color: parsed.color })
}

/// The explicit configuration of one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    /// `op` is the set operation requested
    pub op: OpName,
    /// The baseline file
    pub first: PathBuf,
    /// The candidate file
    pub second: PathBuf,
    /// Whether to color the `diff` markers
    pub color: ColorChoice,
}

/// Name of the requested operation
#[derive(PartialEq, Eq, Debug, Clone, Copy, ValueEnum)]
pub enum OpName {
    /// Show unique lines that differ between FILE1 (-) and FILE2 (+)
    Diff,
    /// Show unique lines in FILE1 that are not in FILE2
    Minus,
    /// Show unique lines common to FILE1 and FILE2
    Cross,
}

#[derive(Debug, Parser)]
#[command(name = "lset", version)]
/// lset treats two files as sets of lines and prints their difference,
/// the lines only in the first, or the lines common to both. Output is
/// sorted.
struct CliArgs {
    #[arg(value_enum, value_name = "COMMAND")]
    /// The set operation to perform
    op: OpName,
    #[arg(value_name = "FILE1")]
    /// First file, the baseline
    file1: PathBuf,
    #[arg(value_name = "FILE2")]
    /// Second file, the candidate
    file2: PathBuf,
    #[arg(long, value_enum, value_name = "WHEN", default_value = "auto")]
    /// When to color the '-' and '+' markers of `diff`
    color: ColorChoice,
}

/// A short description of each operation, printed after a usage error
#[must_use]
pub fn synopsis() -> String {
    let entries: String = OpName::value_variants()
        .iter()
        .filter_map(OpName::to_possible_value)
        .map(|value| {
            let help = value.get_help().map(ToString::to_string).unwrap_or_default();
            format!("    {:<6} - {help}\n", value.get_name())
        })
        .collect();
    format!("where <COMMAND> is one of:\n{entries}")
}
