//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use driver_arrangement::logging::LogFormat;
use driver_arrangement::{InputFormat, Strategy};

#[derive(Parser)]
#[command(
    name = "driver-arrangement",
    version,
    about = "Assign drivers to destinations with the highest total suitability score",
    long_about = "Assign drivers to destinations one-to-one.\n\n\
                  Every driver is scored against every destination and the \
                  assignment with the largest total score is reported. When the \
                  lists differ in length, the extra entries stay unmatched."
)]
pub struct Cli {
    /// File listing driver names.
    #[arg(long, value_name = "PATH")]
    pub drivers: PathBuf,

    /// File listing destination names.
    #[arg(long, value_name = "PATH")]
    pub destinations: PathBuf,

    /// Layout of the input files.
    #[arg(long = "input-format", value_enum, default_value = "lines")]
    pub input_format: InputFormatArg,

    /// Matching strategy. `greedy` is approximate and may miss the best total.
    #[arg(long, value_enum, default_value = "exact")]
    pub strategy: StrategyArg,

    /// Result format written to stdout.
    #[arg(long, value_enum, default_value = "text")]
    pub output: OutputArg,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format.
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum InputFormatArg {
    /// One name per line.
    Lines,
    /// A JSON array of strings.
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    Exact,
    Greedy,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputArg {
    Text,
    Json,
}

/// CLI log format choices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<InputFormatArg> for InputFormat {
    fn from(arg: InputFormatArg) -> Self {
        match arg {
            InputFormatArg::Lines => InputFormat::Lines,
            InputFormatArg::Json => InputFormat::Json,
        }
    }
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Exact => Strategy::Exact,
            StrategyArg::Greedy => Strategy::Greedy,
        }
    }
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}
