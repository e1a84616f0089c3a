//! CLI argument parsing for adhocnet
//!
//! Global flags: --config, --quiet, --verbose, --log-level, --log-json,
//! plus --add-node/--add-link to extend the demo network.

pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use parse::{LinkSpec, NodeRef};
use parse::{parse_link_spec, parse_node_ref};

/// adhocnet - explore a small ad-hoc network
#[derive(Parser, Debug)]
#[command(name = "adhocnet")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file (default: ~/.config/adhocnet/config.toml)
    #[arg(long, global = true, env = "ADHOCNET_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress error output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Add a node to the demo network, e.g. `PC-D`
    #[arg(long = "add-node", global = true, value_name = "KIND-NAME", value_parser = parse_node_ref)]
    pub add_nodes: Vec<NodeRef>,

    /// Add a link to the demo network, e.g. `Channel-4:PC-A:PC-C`
    #[arg(long = "add-link", global = true, value_name = "KIND-NAME:NODE:NODE", value_parser = parse_link_spec)]
    pub add_links: Vec<LinkSpec>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the breadth-first traversal trace (default)
    Print {
        /// Hide `Visited:` lines
        #[arg(long)]
        no_revisits: bool,

        /// Hide `Cross Edge:` lines
        #[arg(long)]
        no_cross_edges: bool,
    },

    /// Print the nodes and links of the network
    Dump,

    /// Report whether the network contains a cycle
    Cycle {
        /// Also list the links that close a cycle
        #[arg(long)]
        links: bool,
    },

    /// Print the spanning tree grown from a node
    Tree {
        /// Root node, e.g. `PC-A`
        #[arg(value_parser = parse_node_ref)]
        node: NodeRef,
    },

    /// Print a fewest-hops path between two nodes
    Path {
        #[arg(value_parser = parse_node_ref)]
        from: NodeRef,

        #[arg(value_parser = parse_node_ref)]
        to: NodeRef,

        /// Print only the number of hops
        #[arg(long)]
        hops: bool,
    },

    /// Report whether two nodes share a link
    Adjacent {
        #[arg(value_parser = parse_node_ref)]
        a: NodeRef,

        #[arg(value_parser = parse_node_ref)]
        b: NodeRef,
    },

    /// List the links touching a node
    Incident {
        #[arg(value_parser = parse_node_ref)]
        node: NodeRef,
    },

    /// Count connected components
    Components,
}
