//! adhoc-net core library
//!
//! Graph engine for small ad-hoc networks: typed hosts and links, a
//! symmetric adjacency matrix, and breadth-first algorithms for traversal,
//! cycle detection, spanning trees and fewest-hops paths.

pub mod config;
pub mod error;
pub mod graph;
pub mod id;
pub mod logging;
pub mod network;
pub mod sample;

pub use error::{NetError, Result};
pub use graph::{TraceOptions, TraceRenderer, TraversalEvent};
pub use id::{LinkId, NodeId};
pub use network::{Link, LinkKind, Network, Node, NodeKind};
