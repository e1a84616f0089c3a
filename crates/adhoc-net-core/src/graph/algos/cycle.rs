//! Cycle detection

use crate::graph::bfs::FullTraversal;
use crate::network::{Link, Network};

/// True iff any component contains a cycle.
///
/// A full traversal flags every link that joins two already-reached nodes;
/// at least one such link exists exactly when the graph has a cycle.
#[tracing::instrument(skip(network), fields(nodes = network.node_count(), links = network.link_count()))]
pub fn has_cycle(network: &Network) -> bool {
    let (state, _) = FullTraversal::new(network).run();
    state.has_cross_edges()
}

/// Links left out of the traversal forest, one per independent cycle
pub fn cycle_links(network: &Network) -> Vec<&Link> {
    let (state, _) = FullTraversal::new(network).run();
    network
        .links()
        .iter()
        .filter(|link| state.is_cross_edge(link.id()))
        .collect()
}

/// Number of connected components
pub fn component_count(network: &Network) -> usize {
    let (_, roots) = FullTraversal::new(network).run();
    roots
}
