//! Canonical sample network
//!
//! Three fixed hosts and one mobile host, all joined through `PC-B`:
//!
//! ```text
//! PC-A --1-- PC-B --2-- PC-C
//!             |
//!             3
//!             |
//!          Mobile-A
//! ```

use crate::error::Result;
use crate::network::{Link, LinkKind, Network, Node, NodeKind};

/// Build the demo network
pub fn demo_network() -> Result<Network> {
    let pc_a = Node::new(NodeKind::Pc, "A");
    let pc_b = Node::new(NodeKind::Pc, "B");
    let pc_c = Node::new(NodeKind::Pc, "C");
    let mob_a = Node::new(NodeKind::Mobile, "A");

    let links = vec![
        Link::new(pc_b.id(), pc_a.id(), LinkKind::Channel, "1"),
        Link::new(pc_b.id(), pc_c.id(), LinkKind::Channel, "2"),
        Link::new(pc_b.id(), mob_a.id(), LinkKind::Channel, "3"),
    ];

    Network::from_parts(vec![pc_a, pc_b, pc_c, mob_a], links)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_network_shape() {
        let network = demo_network().unwrap();
        assert_eq!(network.node_count(), 4);
        assert_eq!(network.link_count(), 3);

        let hub = network.node_by_name(NodeKind::Pc, "B").unwrap();
        assert_eq!(network.incident_links(hub.id()).len(), 3);
        assert!(!network.has_cycle());
    }
}
