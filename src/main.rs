//! Driver arrangement CLI.

use std::io::{self, IsTerminal};

use anyhow::Result;
use clap::{ColorChoice, Parser};
use driver_arrangement::logging::{init_logging, LogConfig};
use driver_arrangement::{read_entities, solve, Collection};

mod cli;
mod report;

use crate::cli::Cli;
use crate::report::render;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    if let Err(error) = init_logging(&log_config_from_cli(&cli)) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }

    let exit_code = match run(&cli) {
        Ok(output) => {
            print!("{output}");
            0
        }
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> Result<String> {
    let format = cli.input_format.into();
    let drivers = read_entities(&cli.drivers, format, Collection::Drivers)?;
    let destinations = read_entities(&cli.destinations, format, Collection::Destinations)?;

    let result = solve(&drivers, &destinations, cli.strategy.into())?;
    render(&result, cli.output)
}

/// Build logging configuration from CLI flags.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        use_env_filter: !cli.verbosity.is_present(),
        with_ansi: match cli.color.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => io::stderr().is_terminal(),
        },
        with_target: false,
        format: cli.log_format.into(),
    }
}
