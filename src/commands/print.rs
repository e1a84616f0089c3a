//! `adhocnet print` - breadth-first traversal trace

use std::time::Instant;

use adhoc_net_core::error::Result;
use adhoc_net_core::network::Network;
use adhoc_net_core::{trace_time, TraceOptions, TraceRenderer};

use crate::commands::dispatch::CommandContext;

/// Print one line per traversal event, covering every component
pub fn execute(ctx: &CommandContext, network: &Network, options: TraceOptions) -> Result<()> {
    let start = Instant::now();
    let renderer = TraceRenderer::with_options(network, options);

    let mut traversal = network.traverse();
    for line in traversal.by_ref().filter_map(|event| renderer.render(&event)) {
        println!("{}", line);
    }

    trace_time!(start, "print_trace", roots = traversal.roots());
    tracing::debug!(elapsed = ?ctx.start.elapsed(), "print");
    Ok(())
}
