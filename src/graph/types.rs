//! Core types for the page graph.
//!
//! Defines pages (nodes), links (edges) and the summary structures
//! returned by graph queries.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A uniquely named node in the page graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    /// The page name. Unique within a graph.
    pub name: String,
    /// Position in page insertion order (0-indexed).
    pub position: usize,
    /// Number of outgoing links; the next link's ordinal.
    #[serde(default)]
    pub(crate) out_degree: usize,
    /// Scratch flag owned by a single reachability query.
    /// Always false outside of `PageGraph::explore`.
    #[serde(skip)]
    pub(crate) visited: bool,
}

impl Page {
    pub fn new(name: String, position: usize) -> Self {
        Self {
            name,
            position,
            out_degree: 0,
            visited: false,
        }
    }

    /// Number of outgoing links, duplicates included.
    pub fn out_degree(&self) -> usize {
        self.out_degree
    }

    /// Whether the page is currently marked by a traversal.
    pub fn is_visited(&self) -> bool {
        self.visited
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Data stored on a graph edge.
///
/// The destination itself is the petgraph edge target; the link only
/// remembers where it sits in its source page's edge list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Position in the source page's outgoing edge list (0-indexed).
    pub ordinal: usize,
}

impl Link {
    pub fn new(ordinal: usize) -> Self {
        Self { ordinal }
    }
}

/// Outcome of a single reachability query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exploration {
    /// Whether the destination was reached.
    pub connected: bool,
    /// Page names in the order they were marked visited.
    pub visited: Vec<String>,
}

/// Statistics about the graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStats {
    pub page_count: usize,
    pub link_count: usize,
}

impl fmt::Display for GraphStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} pages, {} links", self.page_count, self.link_count)
    }
}
