//! Error types for pagelink.
//!
//! The graph core reports failures as `GraphError` values; the command
//! layer and binary wrap them in `LinkerError`.

use std::io;
use thiserror::Error;

/// Result type alias for graph store and connectivity operations.
pub type GraphResult<T> = std::result::Result<T, GraphError>;

/// Result type alias for interpreter, config and I/O operations.
pub type Result<T> = std::result::Result<T, LinkerError>;

/// Failures raised by the graph core. The graph is never left
/// partially mutated when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// `add_page` was given a name that already exists.
    #[error("there is already a page named '{0}'")]
    DuplicatePage(String),

    /// A referenced page name is not in the graph.
    #[error("no page named '{0}'")]
    UnknownPage(String),
}

impl GraphError {
    pub fn duplicate<T: Into<String>>(name: T) -> Self {
        GraphError::DuplicatePage(name.into())
    }

    pub fn unknown<T: Into<String>>(name: T) -> Self {
        GraphError::UnknownPage(name.into())
    }
}

/// Top-level error for everything outside the graph core.
#[derive(Debug, Error)]
pub enum LinkerError {
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// Unrecognized keyword or wrong argument count.
    #[error("malformed command: {0}")]
    MalformedCommand(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl LinkerError {
    pub fn malformed<T: Into<String>>(msg: T) -> Self {
        LinkerError::MalformedCommand(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        LinkerError::Config(msg.into())
    }
}
