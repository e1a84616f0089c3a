//! Per-traversal search state
//!
//! Visited flags, parent pointers and cross-edge marks live here rather than
//! on nodes and links. A fresh state is created for every public traversal
//! and dropped when it returns, so nothing leaks between calls.

use std::collections::HashSet;

use crate::id::LinkId;

#[derive(Debug, Clone)]
pub(crate) struct SearchState {
    visited: Vec<bool>,
    parents: Vec<Option<usize>>,
    tree_links: HashSet<LinkId>,
    cross_edges: HashSet<LinkId>,
}

impl SearchState {
    pub(crate) fn new(node_count: usize) -> Self {
        SearchState {
            visited: vec![false; node_count],
            parents: vec![None; node_count],
            tree_links: HashSet::new(),
            cross_edges: HashSet::new(),
        }
    }

    pub(crate) fn is_visited(&self, pos: usize) -> bool {
        self.visited.get(pos).copied().unwrap_or(false)
    }

    pub(crate) fn visit(&mut self, pos: usize, parent: Option<usize>) {
        self.visited[pos] = true;
        self.parents[pos] = parent;
    }

    /// Position the search reached `pos` from; `None` for roots
    pub(crate) fn parent(&self, pos: usize) -> Option<usize> {
        self.parents.get(pos).copied().flatten()
    }

    pub(crate) fn first_unvisited(&self, from: usize) -> Option<usize> {
        (from..self.visited.len()).find(|&pos| !self.visited[pos])
    }

    pub(crate) fn visited_count(&self) -> usize {
        self.visited.iter().filter(|v| **v).count()
    }

    pub(crate) fn is_tree_link(&self, link: LinkId) -> bool {
        self.tree_links.contains(&link)
    }

    pub(crate) fn mark_tree_link(&mut self, link: LinkId) {
        self.tree_links.insert(link);
    }

    pub(crate) fn mark_cross_edge(&mut self, link: LinkId) {
        self.cross_edges.insert(link);
    }

    pub(crate) fn is_cross_edge(&self, link: LinkId) -> bool {
        self.cross_edges.contains(&link)
    }

    pub(crate) fn has_cross_edges(&self) -> bool {
        !self.cross_edges.is_empty()
    }
}
