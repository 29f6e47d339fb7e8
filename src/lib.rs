//! # pagelink
//!
//! A directed graph of named pages and the links between them, with
//! depth-first reachability queries.
//!
//! ## Quick Start
//!
//! ```rust
//! use pagelink::PageGraph;
//!
//! let mut graph = PageGraph::new();
//! for page in ["myPage", "UofA", "localTheater"] {
//!     graph.add_page(page).unwrap();
//! }
//! graph.add_link("myPage", "UofA").unwrap();
//! graph.add_link("UofA", "localTheater").unwrap();
//!
//! assert_eq!(graph.is_connected("myPage", "localTheater"), Ok(true));
//! assert_eq!(graph.is_connected("localTheater", "myPage"), Ok(false));
//! ```
//!
//! The `command` module runs the line-oriented `@addPages` /
//! `@addLinks` / `@isConnected` language on top of the graph.

pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod graph;

// Re-exports for convenience
pub use error::{GraphError, GraphResult, LinkerError, Result};

pub use command::{parse_line, Command, Interpreter, RunReport};
pub use config::LinkerConfig;
pub use graph::{Exploration, GraphStats, Link, Page, PageGraph};
