//! Level-by-level breadth-first search over the adjacency matrix
//!
//! [`BreadthFirst`] is a lazy iterator of [`TraversalEvent`]s for a single
//! search tree; [`FullTraversal`] chains one search per connected component.
//! Links at a node are examined in increasing position of their far
//! endpoint, which fixes which link of a cycle becomes the cross edge.

pub(crate) mod state;

use std::collections::VecDeque;

use crate::error::{NetError, Result};
use crate::graph::TraversalEvent;
use crate::id::{LinkId, NodeId};
use crate::network::Network;
pub(crate) use state::SearchState;

/// Breadth-first search from one start node
pub struct BreadthFirst<'a> {
    network: &'a Network,
    state: SearchState,
    level: Vec<usize>,
    next_level: Vec<usize>,
    cursor: usize,
    current: usize,
    incident: Vec<(usize, LinkId)>,
    link_cursor: usize,
    finish: Option<usize>,
    pending: VecDeque<TraversalEvent>,
    done: bool,
}

impl<'a> BreadthFirst<'a> {
    /// Search the component containing `start`
    pub fn new(network: &'a Network, start: NodeId) -> Result<Self> {
        let start = position(network, start)?;
        Ok(Self::resume(
            network,
            SearchState::new(network.node_count()),
            start,
            None,
        ))
    }

    /// Search from `start`, stopping as soon as a link touching `finish`
    /// has been examined
    pub fn until(network: &'a Network, start: NodeId, finish: NodeId) -> Result<Self> {
        let start = position(network, start)?;
        let finish = position(network, finish)?;
        Ok(Self::resume(
            network,
            SearchState::new(network.node_count()),
            start,
            Some(finish),
        ))
    }

    /// Continue with an existing state, treating `start` as a new root
    pub(crate) fn resume(
        network: &'a Network,
        mut state: SearchState,
        start: usize,
        finish: Option<usize>,
    ) -> Self {
        state.visit(start, None);
        let mut pending = VecDeque::new();
        pending.push_back(TraversalEvent::Start(network.nodes()[start].id()));

        BreadthFirst {
            network,
            state,
            level: vec![start],
            next_level: Vec::new(),
            cursor: 0,
            current: start,
            incident: Vec::new(),
            link_cursor: 0,
            finish,
            pending,
            done: false,
        }
    }

    /// Drive the search to its end and hand back the state
    pub(crate) fn run(mut self) -> SearchState {
        while self.next().is_some() {}
        self.state
    }

    /// Examine the next link, loading the next node or level as needed
    fn step(&mut self) {
        loop {
            if self.link_cursor < self.incident.len() {
                let (far, link) = self.incident[self.link_cursor];
                self.link_cursor += 1;
                self.examine(self.current, far, link);
                return;
            }

            if self.cursor < self.level.len() {
                self.current = self.level[self.cursor];
                self.cursor += 1;
                self.incident = self.network.matrix().row(self.current).collect();
                self.link_cursor = 0;
                continue;
            }

            if self.next_level.is_empty() {
                self.done = true;
                return;
            }
            self.level = std::mem::take(&mut self.next_level);
            self.cursor = 0;
        }
    }

    fn examine(&mut self, near: usize, far: usize, link: LinkId) {
        if self.state.is_tree_link(link) {
            self.pending.push_back(TraversalEvent::Revisit(link));
            return;
        }

        if !self.state.is_visited(far) {
            self.state.mark_tree_link(link);
            self.state.visit(far, Some(near));
            self.next_level.push(far);
            self.pending.push_back(TraversalEvent::VisitLink(link));
            self.pending
                .push_back(TraversalEvent::VisitNode(self.network.nodes()[far].id()));
        } else {
            self.state.mark_cross_edge(link);
            self.pending.push_back(TraversalEvent::CrossEdge(link));
        }

        if let Some(finish) = self.finish {
            if near == finish || far == finish {
                self.done = true;
            }
        }
    }
}

impl Iterator for BreadthFirst<'_> {
    type Item = TraversalEvent;

    fn next(&mut self) -> Option<TraversalEvent> {
        loop {
            if let Some(event) = self.pending.pop_front() {
                return Some(event);
            }
            if self.done {
                return None;
            }
            self.step();
        }
    }
}

/// Breadth-first search covering every component.
///
/// A new search starts from the first unreached node in list order each time
/// the previous one runs dry.
pub struct FullTraversal<'a> {
    network: &'a Network,
    search: Option<BreadthFirst<'a>>,
    idle: Option<SearchState>,
    roots: usize,
}

impl<'a> FullTraversal<'a> {
    pub fn new(network: &'a Network) -> Self {
        FullTraversal {
            network,
            search: None,
            idle: Some(SearchState::new(network.node_count())),
            roots: 0,
        }
    }

    /// Number of searches started so far
    pub fn roots(&self) -> usize {
        self.roots
    }

    /// Drive every search to its end and hand back the state
    pub(crate) fn run(mut self) -> (SearchState, usize) {
        while self.next().is_some() {}
        let state = match (self.idle, self.search) {
            (Some(state), _) => state,
            (None, Some(search)) => search.run(),
            (None, None) => SearchState::new(self.network.node_count()),
        };
        (state, self.roots)
    }
}

impl Iterator for FullTraversal<'_> {
    type Item = TraversalEvent;

    fn next(&mut self) -> Option<TraversalEvent> {
        loop {
            if let Some(search) = self.search.as_mut() {
                if let Some(event) = search.next() {
                    return Some(event);
                }
                if let Some(search) = self.search.take() {
                    self.idle = Some(search.state);
                }
            }

            let state = self.idle.take()?;
            let Some(root) = state.first_unvisited(0) else {
                self.idle = Some(state);
                return None;
            };
            self.roots += 1;
            self.search = Some(BreadthFirst::resume(self.network, state, root, None));
        }
    }
}

fn position(network: &Network, id: NodeId) -> Result<usize> {
    network
        .position_of(id)
        .ok_or_else(|| NetError::node_not_found(id))
}
