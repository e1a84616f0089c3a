//! Human-readable textual dump of a network

use std::fmt;

use super::Network;

/// One line per node (`[<position>] <Kind>-<name>`) followed by one line per
/// link (`<Kind>-<name>: (<nodeA>, <nodeB>)`), both in list order.
impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (pos, node) in self.nodes().iter().enumerate() {
            writeln!(f, "[{}] {}", pos, node)?;
        }
        for link in self.links() {
            writeln!(f, "{}", self.describe_link(link))?;
        }
        Ok(())
    }
}
