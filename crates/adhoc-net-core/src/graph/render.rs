//! Text rendering of traversal events
//!
//! Produces the diagnostic trace lines (`Start: PC-A`, `Visit: ...`,
//! `Cross Edge: ...`, `Visited: ...`). Callers decide where they go.

use crate::graph::TraversalEvent;
use crate::id::{LinkId, NodeId};
use crate::network::Network;

/// Which events make it into a rendered trace
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceOptions {
    /// Render tree links met again from their far side
    pub show_revisits: bool,
    /// Render links that close a cycle
    pub show_cross_edges: bool,
}

impl Default for TraceOptions {
    fn default() -> Self {
        TraceOptions {
            show_revisits: true,
            show_cross_edges: true,
        }
    }
}

/// Renders events against the network they came from
pub struct TraceRenderer<'a> {
    network: &'a Network,
    options: TraceOptions,
}

impl<'a> TraceRenderer<'a> {
    pub fn new(network: &'a Network) -> Self {
        Self::with_options(network, TraceOptions::default())
    }

    pub fn with_options(network: &'a Network, options: TraceOptions) -> Self {
        TraceRenderer { network, options }
    }

    /// One trace line, or `None` if the options filter the event out
    pub fn render(&self, event: &TraversalEvent) -> Option<String> {
        match *event {
            TraversalEvent::Start(id) => Some(format!("Start: {}", self.node(id))),
            TraversalEvent::VisitLink(id) => Some(format!("Visit: {}", self.link(id))),
            TraversalEvent::VisitNode(id) => Some(format!("Visit: {}", self.node(id))),
            TraversalEvent::CrossEdge(id) if self.options.show_cross_edges => {
                Some(format!("Cross Edge: {}", self.link(id)))
            }
            TraversalEvent::Revisit(id) if self.options.show_revisits => {
                Some(format!("Visited: {}", self.link(id)))
            }
            TraversalEvent::CrossEdge(_) | TraversalEvent::Revisit(_) => None,
        }
    }

    /// Render a whole event stream, skipping filtered events
    pub fn render_all<I>(&self, events: I) -> Vec<String>
    where
        I: IntoIterator<Item = TraversalEvent>,
    {
        events
            .into_iter()
            .filter_map(|event| self.render(&event))
            .collect()
    }

    fn node(&self, id: NodeId) -> String {
        self.network
            .node(id)
            .map(|node| node.to_string())
            .unwrap_or_else(|| id.to_string())
    }

    fn link(&self, id: LinkId) -> String {
        self.network
            .link(id)
            .map(|link| self.network.describe_link(link))
            .unwrap_or_else(|| id.to_string())
    }
}
