//! brandkit CLI Binary
//!
//! Command-line interface for the brandkit content generators.

use anyhow::Context;
use brandkit::cli::{Cli, RunContext};
use brandkit::config::ConfigLoader;
use brandkit::logging::{init_logging, LoggingConfig};
use clap::Parser;
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    let logging_config = build_logging_config(&cli);
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("brandkit starting");

    match run(&cli) {
        Ok(true) => info!("Command completed successfully"),
        Ok(false) => process::exit(1),
        Err(e) => {
            error!("Command failed: {:#}", e);
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    }
}

/// Run the command; `Ok(false)` when the result envelope carried an error.
fn run(cli: &Cli) -> anyhow::Result<bool> {
    let context = RunContext::new(cli.workspace.clone(), cli.config.clone(), cli.json)
        .context("Failed to initialize brandkit")?;

    let output = context
        .execute(&cli.command)
        .map_err(|e| anyhow::anyhow!(brandkit::cli::map_error(&e)))?;

    // JSON envelopes always go to stdout; plain error messages go to stderr.
    if output.success || cli.json {
        println!("{}", output.text);
    } else {
        eprintln!("{}", output.text);
    }
    Ok(output.success)
}

/// Build logging configuration from CLI args and config files.
/// Precedence: CLI flags override config files override defaults.
fn build_logging_config(cli: &Cli) -> LoggingConfig {
    let mut config = ConfigLoader::load(&cli.workspace, cli.config.as_deref())
        .ok()
        .map(|c| c.logging)
        .unwrap_or_default();

    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        config.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        config.file = Some(file.clone());
    }

    config
}
