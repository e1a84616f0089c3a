//! adhocnet - explore a small ad-hoc network
//!
//! Builds the demo network, applies any `--add-node`/`--add-link` edits,
//! and runs one graph query against it.

mod cli;
mod commands;

use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use adhoc_net_core::config::Config;
use adhoc_net_core::error::ExitCode as NetExitCode;
use adhoc_net_core::logging;
use cli::Cli;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = Cli::parse();

    let config = Config::discover(cli.config.as_deref());

    // Flags win over the config file
    let (config_level, config_json) = match &config {
        Ok(config) => (config.log.level.clone(), config.log.json),
        Err(_) => (None, false),
    };
    let log_level = match (&cli.log_level, cli.verbose) {
        (Some(level), _) => Some(level.clone()),
        (None, true) => None,
        (None, false) => config_level,
    };
    if let Err(e) =
        logging::init_tracing(cli.verbose, log_level.as_deref(), cli.log_json || config_json)
    {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    let result = config.and_then(|config| commands::dispatch::run(&cli, &config, start));

    match result {
        Ok(()) => ExitCode::from(NetExitCode::Success as u8),
        Err(e) => {
            if !cli.quiet {
                eprintln!("error: {}", e);
            }
            ExitCode::from(e.exit_code() as u8)
        }
    }
}
