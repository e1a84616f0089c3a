//! Spanning trees and fewest-hops paths

use std::time::Instant;

use adhoc_net_core::error::Result;
use adhoc_net_core::id::NodeId;
use adhoc_net_core::network::Network;
use adhoc_net_core::trace_time;

use crate::commands::dispatch::CommandContext;

pub fn execute_tree(ctx: &CommandContext, network: &Network, root: NodeId) -> Result<()> {
    let start = Instant::now();
    let tree = network.spanning_tree(root)?;
    trace_time!(start, "spanning_tree", nodes = tree.node_count());

    print!("{}", tree);
    tracing::debug!(elapsed = ?ctx.start.elapsed(), "tree");
    Ok(())
}

pub fn execute_path(
    ctx: &CommandContext,
    network: &Network,
    from: NodeId,
    to: NodeId,
    hops_only: bool,
) -> Result<()> {
    let start = Instant::now();
    let path = network.shortest_path(from, to)?;
    trace_time!(start, "shortest_path", found = path.is_some());

    match path {
        Some(path) if hops_only => println!("{}", path.link_count()),
        Some(path) => print!("{}", path),
        None => println!("no path"),
    }
    tracing::debug!(elapsed = ?ctx.start.elapsed(), "path");
    Ok(())
}
