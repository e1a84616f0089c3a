//! Read-only queries: dump, cycle, components, adjacency, incident links

use adhoc_net_core::error::Result;
use adhoc_net_core::id::NodeId;
use adhoc_net_core::network::Network;

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

pub fn execute_dump(network: &Network) -> Result<()> {
    print!("{}", network);
    Ok(())
}

pub fn execute_cycle(network: &Network, list_links: bool) -> Result<()> {
    let links = network.cycle_links();
    println!("cycle: {}", yes_no(!links.is_empty()));

    if list_links {
        for link in links {
            println!("{}", network.describe_link(link));
        }
    }
    Ok(())
}

pub fn execute_components(network: &Network) -> Result<()> {
    println!("{}", network.component_count());
    Ok(())
}

pub fn execute_adjacent(network: &Network, a: NodeId, b: NodeId) -> Result<()> {
    println!("{}", yes_no(network.are_adjacent(a, b)));
    Ok(())
}

pub fn execute_incident(network: &Network, node: NodeId) -> Result<()> {
    for link in network.incident_links(node) {
        println!("{}", network.describe_link(link));
    }
    Ok(())
}
