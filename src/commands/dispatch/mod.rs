//! Command dispatch logic for adhocnet

use std::time::Instant;

use adhoc_net_core::config::Config;
use adhoc_net_core::error::Result;
use tracing::debug;

use crate::cli::Cli;

mod command;
mod commands;

pub use command::CommandContext;
use command::{Command, NoCommand};

pub fn run(cli: &Cli, config: &Config, start: Instant) -> Result<()> {
    let ctx = CommandContext::new(cli, config, start);
    let network = ctx.build_network()?;

    debug!(
        elapsed = ?start.elapsed(),
        nodes = network.node_count(),
        links = network.link_count(),
        "build_network"
    );

    match &cli.command {
        None => NoCommand.execute(&ctx, &network),
        Some(cmd) => cmd.execute(&ctx, &network),
    }
}
