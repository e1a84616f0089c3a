//! The network graph: node and link lists plus their adjacency matrix
//!
//! Nodes are addressed by [`NodeId`]; a node's position in the list is an
//! internal detail that shifts whenever an earlier node is removed, and the
//! matrix is rebuilt to match.

mod dump;
pub mod matrix;
pub mod types;

use std::collections::{HashMap, HashSet};

use tracing::{debug, warn};

use crate::bail_node_not_found;
use crate::error::{NetError, Result};
use crate::id::{LinkId, NodeId};
pub use matrix::AdjacencyMatrix;
pub use types::{Link, LinkKind, Node, NodeKind};

/// An undirected graph of typed hosts joined by typed links
#[derive(Debug, Clone, Default)]
pub struct Network {
    nodes: Vec<Node>,
    links: Vec<Link>,
    matrix: AdjacencyMatrix,
    positions: HashMap<NodeId, usize>,
}

impl Network {
    /// Create an empty network
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a network from explicit node and link lists.
    ///
    /// Positions follow the order of `nodes`. Every link must reference
    /// nodes in the list, no node may appear twice, and no two links may
    /// join the same pair.
    pub fn from_parts(nodes: Vec<Node>, links: Vec<Link>) -> Result<Self> {
        let mut network = Network {
            nodes,
            links,
            matrix: AdjacencyMatrix::default(),
            positions: HashMap::new(),
        };
        network.rebuild()?;
        Ok(network)
    }

    /// Recompute positions and the adjacency matrix from the lists
    fn rebuild(&mut self) -> Result<()> {
        self.positions = self
            .nodes
            .iter()
            .enumerate()
            .map(|(pos, node)| (node.id(), pos))
            .collect();
        if self.positions.len() != self.nodes.len() {
            let mut seen = HashSet::new();
            let repeated = self
                .nodes
                .iter()
                .find(|node| !seen.insert(node.id()))
                .map(|node| node.to_string())
                .unwrap_or_default();
            return Err(NetError::DuplicateNode(repeated));
        }

        let mut matrix = AdjacencyMatrix::new(self.nodes.len());
        for link in &self.links {
            let (row, col) = self.slot_of(link)?;
            if let Some(existing) = matrix.get(row, col) {
                return Err(self.conflict(row, col, existing));
            }
            matrix.put(row, col, link.id())?;
        }
        self.matrix = matrix;

        debug!(
            nodes = self.nodes.len(),
            links = self.links.len(),
            "rebuilt adjacency matrix"
        );
        Ok(())
    }

    fn slot_of(&self, link: &Link) -> Result<(usize, usize)> {
        let (a, b) = link.endpoints();
        let row = self.require_position(a)?;
        let col = self.require_position(b)?;
        Ok((row, col))
    }

    fn require_position(&self, id: NodeId) -> Result<usize> {
        match self.positions.get(&id) {
            Some(&pos) => Ok(pos),
            None => bail_node_not_found!(id),
        }
    }

    fn conflict(&self, row: usize, col: usize, existing: LinkId) -> NetError {
        let name = self
            .link(existing)
            .map(|link| link.name().to_string())
            .unwrap_or_else(|| existing.to_string());
        NetError::duplicate_link(row, col, name)
    }

    /// Insert a node by kind name (`"PC"` or `"Mobile"`)
    pub fn insert_node(&mut self, kind: &str, name: &str) -> Result<NodeId> {
        let kind = kind.parse::<NodeKind>().inspect_err(|e| {
            warn!(error = %e, name, "node insert rejected");
        })?;
        self.add_node(kind, name)
    }

    /// Append a node and rebuild the matrix for the larger index space
    pub fn add_node(&mut self, kind: NodeKind, name: impl Into<String>) -> Result<NodeId> {
        let node = Node::new(kind, name);
        let id = node.id();
        debug!(node = %node, position = self.nodes.len(), "insert node");
        self.nodes.push(node);
        self.rebuild()?;
        Ok(id)
    }

    /// Remove a node together with every link touching it.
    ///
    /// Nodes after it move down one position.
    pub fn remove_node(&mut self, id: NodeId) -> Result<Node> {
        let pos = self.require_position(id).inspect_err(|e| {
            warn!(error = %e, "node removal rejected");
        })?;

        let node = self.nodes.remove(pos);
        let before = self.links.len();
        self.links.retain(|link| !link.touches(id));
        debug!(
            node = %node,
            position = pos,
            dropped_links = before - self.links.len(),
            "remove node"
        );

        self.rebuild()?;
        Ok(node)
    }

    /// Insert a link by kind name (`"Channel"`) between two nodes
    pub fn insert_link(&mut self, a: NodeId, b: NodeId, kind: &str, name: &str) -> Result<LinkId> {
        let kind = kind.parse::<LinkKind>().inspect_err(|e| {
            warn!(error = %e, name, "link insert rejected");
        })?;
        self.add_link(a, b, kind, name)
    }

    /// Join `a` and `b` with a new link.
    ///
    /// Fails without changing anything if either node is unknown or the
    /// pair is already joined.
    pub fn add_link(
        &mut self,
        a: NodeId,
        b: NodeId,
        kind: LinkKind,
        name: impl Into<String>,
    ) -> Result<LinkId> {
        let link = Link::new(a, b, kind, name);
        let (row, col) = self.slot_of(&link).inspect_err(|e| {
            warn!(error = %e, link = %link.label(), "link insert rejected");
        })?;

        if let Some(existing) = self.matrix.get(row, col) {
            let err = self.conflict(row, col, existing);
            warn!(error = %err, link = %link.label(), "link insert rejected");
            return Err(err);
        }

        let id = link.id();
        self.matrix.put(row, col, id)?;
        debug!(link = %self.describe_link(&link), "insert link");
        self.links.push(link);
        Ok(id)
    }

    /// Remove a link from the list and clear its matrix slot
    pub fn remove_link(&mut self, id: LinkId) -> Result<Link> {
        let Some(index) = self.links.iter().position(|link| link.id() == id) else {
            warn!(link = %id, "link removal rejected: not found");
            return Err(NetError::link_not_found(id));
        };

        let (row, col) = self.slot_of(&self.links[index])?;
        self.matrix.remove(row, col).inspect_err(|e| {
            warn!(error = %e, "link removal rejected");
        })?;

        let link = self.links.remove(index);
        debug!(link = %link.label(), "remove link");
        Ok(link)
    }

    pub fn rename_node(&mut self, id: NodeId, name: impl Into<String>) -> Result<()> {
        let pos = self.require_position(id)?;
        self.nodes[pos].set_name(name.into());
        Ok(())
    }

    pub fn rename_link(&mut self, id: LinkId, name: impl Into<String>) -> Result<()> {
        let Some(link) = self.links.iter_mut().find(|link| link.id() == id) else {
            return Err(NetError::link_not_found(id));
        };
        link.set_name(name.into());
        Ok(())
    }

    /// True iff a link joins `v` and `w`; unknown nodes are never adjacent
    pub fn are_adjacent(&self, v: NodeId, w: NodeId) -> bool {
        match (self.position_of(v), self.position_of(w)) {
            (Some(row), Some(col)) => self.matrix.get(row, col).is_some(),
            _ => false,
        }
    }

    /// Links touching `v`, ordered by the position of their other endpoint
    pub fn incident_links(&self, v: NodeId) -> Vec<&Link> {
        let Some(row) = self.position_of(v) else {
            return Vec::new();
        };
        self.matrix
            .row(row)
            .filter_map(|(_, id)| self.link(id))
            .collect()
    }

    /// Link joining `v` and `w`, if any
    pub fn link_between(&self, v: NodeId, w: NodeId) -> Option<&Link> {
        let row = self.position_of(v)?;
        let col = self.position_of(w)?;
        self.matrix.get(row, col).and_then(|id| self.link(id))
    }

    /// First node with the given kind name and name
    pub fn find_node(&self, kind: &str, name: &str) -> Result<&Node> {
        let kind = kind.parse::<NodeKind>()?;
        self.node_by_name(kind, name).ok_or_else(|| {
            let err = NetError::node_not_found(format!("{}-{}", kind, name));
            warn!(error = %err, "node lookup failed");
            err
        })
    }

    /// First link with the given kind name and name
    pub fn find_link(&self, kind: &str, name: &str) -> Result<&Link> {
        let kind = kind.parse::<LinkKind>()?;
        self.link_by_name(kind, name).ok_or_else(|| {
            let err = NetError::link_not_found(format!("{}-{}", kind, name));
            warn!(error = %err, "link lookup failed");
            err
        })
    }

    pub fn node_by_name(&self, kind: NodeKind, name: &str) -> Option<&Node> {
        self.nodes
            .iter()
            .find(|node| node.kind() == kind && node.name() == name)
    }

    pub fn link_by_name(&self, kind: LinkKind, name: &str) -> Option<&Link> {
        self.links
            .iter()
            .find(|link| link.kind() == kind && link.name() == name)
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.position_of(id).map(|pos| &self.nodes[pos])
    }

    pub fn link(&self, id: LinkId) -> Option<&Link> {
        self.links.iter().find(|link| link.id() == id)
    }

    /// Current position of a node in the node list
    pub fn position_of(&self, id: NodeId) -> Option<usize> {
        self.positions.get(&id).copied()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn matrix(&self) -> &AdjacencyMatrix {
        &self.matrix
    }

    /// Display names of a link's endpoints, falling back to raw ids
    pub fn endpoint_names(&self, link: &Link) -> (String, String) {
        let (a, b) = link.endpoints();
        let name = |id: NodeId| {
            self.node(id)
                .map(|node| node.to_string())
                .unwrap_or_else(|| id.to_string())
        };
        (name(a), name(b))
    }

    /// `<Kind>-<name>: (<nodeA>, <nodeB>)`
    pub fn describe_link(&self, link: &Link) -> String {
        let (a, b) = self.endpoint_names(link);
        format!("{}: ({}, {})", link.label(), a, b)
    }
}
