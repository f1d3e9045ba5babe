//! embedgen CLI - embed binary assets into C headers
//!
//! Usage: embedgen --in-dir <DIR> --out-dir <DIR> [--pattern <GLOB>] [--recursive]

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use embedgen::config::{self, Config, Verbosity};
use embedgen::infrastructure::{ConsoleEventSink, JsonEventSink};
use embedgen::{generate_with_events, GenerateEventSink, GenerateOptions};

mod cli;
mod ui;

use cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            ui::error::print_error(&err, cli.json);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let cwd = std::env::current_dir().context("cannot determine working directory")?;
    let loaded = config::load_config(cli.config.as_deref(), &cwd)?;
    for warning in &loaded.warnings {
        ui::error::print_warning(warning, cli.json);
    }

    let config = apply_cli_overrides(loaded.config.with_env_overrides(), cli);
    let options = GenerateOptions::try_from(&config)?;

    let sink: Box<dyn GenerateEventSink> = if cli.json {
        Box::new(JsonEventSink::stdout())
    } else {
        Box::new(ConsoleEventSink::stdout(config.output.verbosity))
    };

    generate_with_events(&options, sink.as_ref())?;
    Ok(())
}

/// Flags win over every other configuration layer.
fn apply_cli_overrides(mut config: Config, cli: &Cli) -> Config {
    if let Some(dir) = &cli.in_dir {
        config.input.dir = Some(dir.clone());
    }
    if let Some(dir) = &cli.out_dir {
        config.output.dir = Some(dir.clone());
    }
    if let Some(pattern) = &cli.pattern {
        config.input.pattern = pattern.clone();
    }
    if cli.recursive {
        config.input.recursive = true;
    }
    if cli.no_atomic {
        config.output.atomic_writes = false;
    }

    config.output.verbosity = match (cli.quiet, cli.verbose) {
        (true, _) => Verbosity::Quiet,
        (false, 0) => config.output.verbosity,
        (false, 1) => Verbosity::Verbose,
        (false, _) => Verbosity::Debug,
    };
    config
}
