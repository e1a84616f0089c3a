//! Error types and exit codes for adhoc-net
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, unrecognized kinds)
//! - 3: Data error (unknown node or link, duplicate node or link, missing link)

mod macros;

use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - network rejected the operation (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during network operations
#[derive(Error, Debug)]
pub enum NetError {
    // Usage errors (exit code 2)
    #[error("{0}")]
    UsageError(String),

    #[error("node type '{0}' not recognised (supported: PC, Mobile)")]
    UnknownNodeKind(String),

    #[error("link type '{0}' not recognised (supported: Channel)")]
    UnknownLinkKind(String),

    // Data errors (exit code 3)
    #[error("link already exists at adjacency matrix position {row}, {col}: remove link {existing} before trying again")]
    DuplicateLink {
        row: usize,
        col: usize,
        existing: String,
    },

    #[error("node {0} appears more than once")]
    DuplicateNode(String),

    #[error("no link exists at adjacency matrix position {row}, {col}")]
    MissingLink { row: usize, col: usize },

    #[error("{0} could not be found")]
    NodeNotFound(String),

    #[error("{0} could not be found")]
    LinkNotFound(String),

    #[error("index {index} out of range for adjacency matrix of size {size}")]
    IndexOutOfRange { index: usize, size: usize },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl NetError {
    /// Create a duplicate-link error naming the link already in the slot
    pub fn duplicate_link(row: usize, col: usize, existing: impl std::fmt::Display) -> Self {
        NetError::DuplicateLink {
            row,
            col,
            existing: existing.to_string(),
        }
    }

    /// Create a not-found error for a node id or `<Kind>-<name>` label
    pub fn node_not_found(label: impl std::fmt::Display) -> Self {
        NetError::NodeNotFound(label.to_string())
    }

    /// Create a not-found error for a link id or `<Kind>-<name>` label
    pub fn link_not_found(label: impl std::fmt::Display) -> Self {
        NetError::LinkNotFound(label.to_string())
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            NetError::UsageError(_)
            | NetError::UnknownNodeKind(_)
            | NetError::UnknownLinkKind(_) => ExitCode::Usage,

            NetError::DuplicateLink { .. }
            | NetError::DuplicateNode(_)
            | NetError::MissingLink { .. }
            | NetError::NodeNotFound(_)
            | NetError::LinkNotFound(_)
            | NetError::IndexOutOfRange { .. } => ExitCode::Data,

            NetError::Io(_) | NetError::Toml(_) | NetError::Other(_) => ExitCode::Failure,
        }
    }
}

/// Result type alias for adhoc-net operations
pub type Result<T> = std::result::Result<T, NetError>;
