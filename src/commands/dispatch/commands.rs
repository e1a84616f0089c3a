//! Command implementations for all adhocnet commands

use adhoc_net_core::error::Result;
use adhoc_net_core::network::Network;

use crate::cli::Commands;
use crate::commands::dispatch::command::{resolve, Command, CommandContext};
use crate::commands::{print, query, route};

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext, network: &Network) -> Result<()> {
        match self {
            Commands::Print {
                no_revisits,
                no_cross_edges,
            } => {
                let mut options = ctx.trace_options();
                options.show_revisits &= !no_revisits;
                options.show_cross_edges &= !no_cross_edges;
                print::execute(ctx, network, options)
            }
            Commands::Dump => query::execute_dump(network),
            Commands::Cycle { links } => query::execute_cycle(network, *links),
            Commands::Components => query::execute_components(network),
            Commands::Adjacent { a, b } => {
                let a = resolve(network, a)?.id();
                let b = resolve(network, b)?.id();
                query::execute_adjacent(network, a, b)
            }
            Commands::Incident { node } => {
                let node = resolve(network, node)?.id();
                query::execute_incident(network, node)
            }
            Commands::Tree { node } => {
                let root = resolve(network, node)?.id();
                route::execute_tree(ctx, network, root)
            }
            Commands::Path { from, to, hops } => {
                let from = resolve(network, from)?.id();
                let to = resolve(network, to)?.id();
                route::execute_path(ctx, network, from, to, *hops)
            }
        }
    }
}
