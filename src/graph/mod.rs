//! Page graph module — the core of pagelink.
//!
//! Provides the page/link data model, the graph store, and
//! depth-first reachability queries.

pub mod connectivity;
pub mod engine;
pub mod types;

pub use engine::PageGraph;
pub use types::{Exploration, GraphStats, Link, Page};
