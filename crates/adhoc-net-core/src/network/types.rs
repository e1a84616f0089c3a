//! Node and link records

use std::fmt;
use std::str::FromStr;

use crate::error::{NetError, Result};
use crate::id::{LinkId, NodeId};

/// Kind of host participating in the network
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Fixed host
    Pc,
    /// Mobile host
    Mobile,
}

impl NodeKind {
    /// All recognised node kind names
    pub const VALID_KINDS: &'static [&'static str] = &["PC", "Mobile"];

    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Pc => "PC",
            NodeKind::Mobile => "Mobile",
        }
    }
}

impl FromStr for NodeKind {
    type Err = NetError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "PC" => Ok(NodeKind::Pc),
            "Mobile" => Ok(NodeKind::Mobile),
            other => Err(NetError::UnknownNodeKind(other.to_string())),
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of link joining two hosts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkKind {
    /// Generic wireless or wired channel
    Channel,
}

impl LinkKind {
    /// All recognised link kind names
    pub const VALID_KINDS: &'static [&'static str] = &["Channel"];

    pub fn as_str(&self) -> &'static str {
        match self {
            LinkKind::Channel => "Channel",
        }
    }
}

impl FromStr for LinkKind {
    type Err = NetError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Channel" => Ok(LinkKind::Channel),
            other => Err(NetError::UnknownLinkKind(other.to_string())),
        }
    }
}

impl fmt::Display for LinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A host in the network
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    id: NodeId,
    kind: NodeKind,
    name: String,
}

impl Node {
    pub fn new(kind: NodeKind, name: impl Into<String>) -> Self {
        Node {
            id: NodeId::new(),
            kind,
            name: name.into(),
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }
}

/// `<Kind>-<name>`, e.g. `PC-A`
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.kind, self.name)
    }
}

/// An undirected connection between two hosts
///
/// Endpoints are held by id; the owning network resolves them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    id: LinkId,
    kind: LinkKind,
    name: String,
    a: NodeId,
    b: NodeId,
}

impl Link {
    pub fn new(a: NodeId, b: NodeId, kind: LinkKind, name: impl Into<String>) -> Self {
        Link {
            id: LinkId::new(),
            kind,
            name: name.into(),
            a,
            b,
        }
    }

    pub fn id(&self) -> LinkId {
        self.id
    }

    pub fn kind(&self) -> LinkKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Endpoints in the order they were given at creation
    pub fn endpoints(&self) -> (NodeId, NodeId) {
        (self.a, self.b)
    }

    pub fn touches(&self, node: NodeId) -> bool {
        self.a == node || self.b == node
    }

    /// The endpoint that is not `node`, if `node` is an endpoint at all
    pub fn opposite(&self, node: NodeId) -> Option<NodeId> {
        if self.a == node {
            Some(self.b)
        } else if self.b == node {
            Some(self.a)
        } else {
            None
        }
    }

    /// `<Kind>-<name>`, without endpoints
    pub fn label(&self) -> String {
        format!("{}-{}", self.kind, self.name)
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }
}
