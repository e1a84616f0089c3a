//! Structured events emitted by breadth-first traversal

use crate::id::{LinkId, NodeId};

/// One step of a traversal, in the order the search performs it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalEvent {
    /// A search rooted at this node began
    Start(NodeId),
    /// A link became part of the search tree
    VisitLink(LinkId),
    /// A node was reached for the first time
    VisitNode(NodeId),
    /// A link joins two nodes already reached through other routes
    CrossEdge(LinkId),
    /// A tree link was met again from its far side
    Revisit(LinkId),
}

impl TraversalEvent {
    pub fn is_start(&self) -> bool {
        matches!(self, TraversalEvent::Start(_))
    }

    /// Node carried by the event, if any
    pub fn node(&self) -> Option<NodeId> {
        match self {
            TraversalEvent::Start(id) | TraversalEvent::VisitNode(id) => Some(*id),
            _ => None,
        }
    }

    /// Link carried by the event, if any
    pub fn link(&self) -> Option<LinkId> {
        match self {
            TraversalEvent::VisitLink(id)
            | TraversalEvent::CrossEdge(id)
            | TraversalEvent::Revisit(id) => Some(*id),
            _ => None,
        }
    }
}
