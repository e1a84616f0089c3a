//! Command trait and context for dispatching commands

use std::time::Instant;

use adhoc_net_core::bail_usage;
use adhoc_net_core::config::Config;
use adhoc_net_core::error::Result;
use adhoc_net_core::network::{Network, Node};
use adhoc_net_core::sample::demo_network;
use adhoc_net_core::TraceOptions;

use crate::cli::{Cli, NodeRef};
use crate::commands::print;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: &'a Config,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: &'a Config, start: Instant) -> Self {
        Self { cli, config, start }
    }

    /// The demo network with the command-line additions applied in order
    pub fn build_network(&self) -> Result<Network> {
        let mut network = demo_network()?;

        for node in &self.cli.add_nodes {
            network.insert_node(&node.kind, &node.name)?;
        }

        for link in &self.cli.add_links {
            if link.a == link.b {
                bail_usage!(format!(
                    "link {}-{} joins {} to itself",
                    link.kind, link.name, link.a
                ));
            }
            let a = resolve(&network, &link.a)?.id();
            let b = resolve(&network, &link.b)?.id();
            network.insert_link(a, b, &link.kind, &link.name)?;
        }

        Ok(network)
    }

    pub fn trace_options(&self) -> TraceOptions {
        TraceOptions::from(&self.config.trace)
    }
}

/// Look up a `<Kind>-<name>` argument
pub fn resolve<'n>(network: &'n Network, node: &NodeRef) -> Result<&'n Node> {
    network.find_node(&node.kind, &node.name)
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext, network: &Network) -> Result<()>;
}

/// No subcommand: print the traversal trace
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, ctx: &CommandContext, network: &Network) -> Result<()> {
        print::execute(ctx, network, ctx.trace_options())
    }
}
