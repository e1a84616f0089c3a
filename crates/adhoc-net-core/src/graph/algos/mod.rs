//! Algorithms built on breadth-first search
//!
//! - Cycle detection from the cross edges of a full traversal
//! - Spanning tree of one component
//! - Fewest-hops path between two nodes

pub mod cycle;
pub mod path;
pub mod spanning;

pub use cycle::{component_count, cycle_links, has_cycle};
pub use path::{path_hops, shortest_path};
pub use spanning::spanning_tree;
