//! Stable identifiers for nodes and links
//!
//! A node's position in the network changes whenever an earlier node is
//! removed, so callers hold these ids instead. Both wrap a ULID.

use std::fmt;

use ulid::Ulid;

/// Opaque identity of a node, stable across removals of other nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(Ulid);

/// Opaque identity of a link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LinkId(Ulid);

impl NodeId {
    pub fn new() -> Self {
        NodeId(Ulid::new())
    }
}

impl LinkId {
    pub fn new() -> Self {
        LinkId(Ulid::new())
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for LinkId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node:{}", self.0)
    }
}

impl fmt::Display for LinkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "link:{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let a = NodeId::new();
        let b = NodeId::new();
        assert_ne!(a, b);
        assert_ne!(LinkId::new(), LinkId::new());
    }

    #[test]
    fn test_display_prefix() {
        assert!(NodeId::new().to_string().starts_with("node:"));
        assert!(LinkId::new().to_string().starts_with("link:"));
    }
}
