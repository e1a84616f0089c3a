//! Spanning tree extraction

use tracing::debug;

use crate::error::Result;
use crate::graph::bfs::BreadthFirst;
use crate::id::NodeId;
use crate::network::Network;

/// Spanning tree of the component containing `start`.
///
/// The tree is a new network holding the reached nodes and the links the
/// search travelled along, both in their original list order. Node and link
/// ids are preserved; positions are renumbered.
#[tracing::instrument(skip_all, fields(start = %start))]
pub fn spanning_tree(network: &Network, start: NodeId) -> Result<Network> {
    let state = BreadthFirst::new(network, start)?.run();

    let nodes = network
        .nodes()
        .iter()
        .enumerate()
        .filter(|(pos, _)| state.is_visited(*pos))
        .map(|(_, node)| node.clone())
        .collect::<Vec<_>>();
    let links = network
        .links()
        .iter()
        .filter(|link| state.is_tree_link(link.id()))
        .cloned()
        .collect::<Vec<_>>();

    debug!(nodes = nodes.len(), links = links.len(), "spanning tree");
    Network::from_parts(nodes, links)
}
