//! Fewest-hops path between two nodes

use tracing::debug;

use crate::error::{NetError, Result};
use crate::graph::bfs::{BreadthFirst, SearchState};
use crate::id::NodeId;
use crate::network::{Link, Network, Node};

/// Shortest path from `from` to `to`, counted in links.
///
/// The search runs backwards, rooted at `to` and stopping once `from` is
/// reached, so every parent pointer on the way leads towards `to`. Returns
/// `Ok(None)` when the two nodes are in different components. The path is a
/// new network whose nodes are listed origin first.
#[tracing::instrument(skip_all, fields(from = %from, to = %to))]
pub fn shortest_path(network: &Network, from: NodeId, to: NodeId) -> Result<Option<Network>> {
    let origin = network
        .position_of(from)
        .ok_or_else(|| NetError::node_not_found(from))?;
    let destination = network
        .position_of(to)
        .ok_or_else(|| NetError::node_not_found(to))?;

    let state = BreadthFirst::until(network, to, from)?.run();
    if !state.is_visited(origin) {
        debug!("no path");
        return Ok(None);
    }

    let (nodes, links) = reconstruct_path(network, &state, origin, destination)?;
    debug!(hops = links.len(), "path found");
    Network::from_parts(nodes, links).map(Some)
}

/// Number of links on the shortest path, or `None` if unreachable
pub fn path_hops(network: &Network, from: NodeId, to: NodeId) -> Result<Option<usize>> {
    Ok(shortest_path(network, from, to)?.map(|path| path.link_count()))
}

/// Follow parent pointers from `origin` up to the search root
fn reconstruct_path(
    network: &Network,
    state: &SearchState,
    origin: usize,
    destination: usize,
) -> Result<(Vec<Node>, Vec<Link>)> {
    let mut nodes = Vec::new();
    let mut links = Vec::new();

    let mut current = origin;
    while current != destination {
        let parent = state.parent(current).ok_or_else(|| {
            NetError::Other(format!(
                "broken parent chain at {}",
                network.nodes()[current]
            ))
        })?;
        let link = network
            .matrix()
            .get(current, parent)
            .and_then(|id| network.link(id))
            .ok_or(NetError::MissingLink {
                row: current,
                col: parent,
            })?;

        nodes.push(network.nodes()[current].clone());
        links.push(link.clone());
        current = parent;
    }
    nodes.push(network.nodes()[destination].clone());

    Ok((nodes, links))
}
