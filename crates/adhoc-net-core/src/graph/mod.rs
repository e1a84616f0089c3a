//! Graph traversal and path-finding operations
//!
//! Provides the algorithms for navigating the network:
//! - BFS traversal as a lazy stream of events
//! - Cycle detection and component counting
//! - Spanning trees and fewest-hops paths
//! - Rendering of traversal traces

pub mod algos;
pub mod bfs;
pub mod events;
pub mod render;

pub use algos::{component_count, cycle_links, has_cycle, path_hops, shortest_path, spanning_tree};
pub use bfs::{BreadthFirst, FullTraversal};
pub use events::TraversalEvent;
pub use render::{TraceOptions, TraceRenderer};

use crate::error::Result;
use crate::id::NodeId;
use crate::network::{Link, Network};

impl Network {
    /// Breadth-first traversal of every component, as a lazy event stream
    pub fn traverse(&self) -> FullTraversal<'_> {
        FullTraversal::new(self)
    }

    /// Collected events of a full traversal
    pub fn trace(&self) -> Vec<TraversalEvent> {
        self.traverse().collect()
    }

    /// Breadth-first traversal of the component containing `start`
    pub fn search_from(&self, start: NodeId) -> Result<BreadthFirst<'_>> {
        BreadthFirst::new(self, start)
    }

    pub fn has_cycle(&self) -> bool {
        has_cycle(self)
    }

    pub fn cycle_links(&self) -> Vec<&Link> {
        cycle_links(self)
    }

    pub fn component_count(&self) -> usize {
        component_count(self)
    }

    pub fn spanning_tree(&self, start: NodeId) -> Result<Network> {
        spanning_tree(self, start)
    }

    pub fn shortest_path(&self, from: NodeId, to: NodeId) -> Result<Option<Network>> {
        shortest_path(self, from, to)
    }

    pub fn path_hops(&self, from: NodeId, to: NodeId) -> Result<Option<usize>> {
        path_hops(self, from, to)
    }
}
