//! Configuration type definitions

use serde::Deserialize;

use crate::graph::TraceOptions;

/// Tool configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Trace rendering
    #[serde(default)]
    pub trace: TraceConfig,

    /// Logging defaults, overridden by command-line flags
    #[serde(default)]
    pub log: LogConfig,
}

/// Which traversal events are printed
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TraceConfig {
    /// Print `Visited:` lines for tree links met again
    #[serde(default = "default_true")]
    pub show_revisits: bool,

    /// Print `Cross Edge:` lines
    #[serde(default = "default_true")]
    pub show_cross_edges: bool,
}

impl Default for TraceConfig {
    fn default() -> Self {
        TraceConfig {
            show_revisits: true,
            show_cross_edges: true,
        }
    }
}

impl From<&TraceConfig> for TraceOptions {
    fn from(config: &TraceConfig) -> Self {
        TraceOptions {
            show_revisits: config.show_revisits,
            show_cross_edges: config.show_cross_edges,
        }
    }
}

/// Logging defaults
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LogConfig {
    /// Level or filter directive (e.g. `debug`, `adhoc_net_core=trace`)
    #[serde(default)]
    pub level: Option<String>,

    /// Emit JSON log lines
    #[serde(default)]
    pub json: bool,
}

fn default_true() -> bool {
    true
}
