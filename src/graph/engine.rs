//! The page graph store.
//!
//! Uses petgraph to hold pages and their outgoing links, plus a name
//! index for lookup. Reachability queries live in `connectivity`.

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use std::collections::HashMap;
use tracing::debug;

use super::types::*;
use crate::error::{GraphError, GraphResult};

/// The page graph: all pages, their links, and a name index.
pub struct PageGraph {
    /// The directed graph. Node indices are append-only and match
    /// page insertion order.
    graph: DiGraph<Page, Link>,
    /// Index: page name -> node index.
    name_index: HashMap<String, NodeIndex>,
}

impl PageGraph {
    /// Create a new empty page graph.
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            name_index: HashMap::new(),
        }
    }

    pub(crate) fn inner_graph(&self) -> &DiGraph<Page, Link> {
        &self.graph
    }

    pub(crate) fn inner_graph_mut(&mut self) -> &mut DiGraph<Page, Link> {
        &mut self.graph
    }

    // ─── Page Operations ────────────────────────────────────────

    /// Add a page after all existing pages.
    ///
    /// Fails with `DuplicatePage` if the name is taken; the graph is
    /// unchanged in that case.
    pub fn add_page(&mut self, name: &str) -> GraphResult<()> {
        if self.name_index.contains_key(name) {
            return Err(GraphError::duplicate(name));
        }
        let position = self.graph.node_count();
        let idx = self.graph.add_node(Page::new(name.to_string(), position));
        self.name_index.insert(name.to_string(), idx);
        debug!(page = name, position, "page added");
        Ok(())
    }

    /// Add each name in order. One result per name; a failure does not
    /// stop later names from being added.
    pub fn add_pages<'a, I>(&mut self, names: I) -> Vec<GraphResult<()>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        names.into_iter().map(|name| self.add_page(name)).collect()
    }

    // ─── Link Operations ────────────────────────────────────────

    /// Append a link `source -> dest` to the end of the source page's
    /// edge list.
    ///
    /// Both pages must already exist. The source is checked first, so
    /// when both are missing the error names the source.
    pub fn add_link(&mut self, source: &str, dest: &str) -> GraphResult<()> {
        let from = self.index_of(source)?;
        let to = self.index_of(dest)?;
        let page = &mut self.graph[from];
        let ordinal = page.out_degree;
        page.out_degree += 1;
        self.graph.add_edge(from, to, Link::new(ordinal));
        debug!(source, dest, ordinal, "link added");
        Ok(())
    }

    /// Link `source` to each destination in order, one result per
    /// destination.
    pub fn add_links<'a, I>(&mut self, source: &str, dests: I) -> Vec<GraphResult<()>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        dests
            .into_iter()
            .map(|dest| self.add_link(source, dest))
            .collect()
    }

    // ─── Query Operations ───────────────────────────────────────

    /// Find a page by name.
    pub fn lookup(&self, name: &str) -> Option<&Page> {
        self.name_index.get(name).map(|&idx| &self.graph[idx])
    }

    /// Whether a page with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.name_index.contains_key(name)
    }

    /// All pages in insertion order.
    pub fn pages(&self) -> impl Iterator<Item = &Page> + '_ {
        self.graph.node_weights()
    }

    /// Destination names of a page's links, in edge insertion order.
    /// Returns `None` for an unknown page.
    pub fn links(&self, name: &str) -> Option<Vec<&str>> {
        let idx = *self.name_index.get(name)?;
        Some(
            self.ordered_targets(idx)
                .into_iter()
                .map(|target| self.graph[target].name.as_str())
                .collect(),
        )
    }

    pub fn page_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn link_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    // ─── Stats ──────────────────────────────────────────────────

    pub fn stats(&self) -> GraphStats {
        GraphStats {
            page_count: self.page_count(),
            link_count: self.link_count(),
        }
    }

    // ─── Internal Helpers ───────────────────────────────────────

    /// Resolve a name to its node index.
    pub(crate) fn index_of(&self, name: &str) -> GraphResult<NodeIndex> {
        self.name_index
            .get(name)
            .copied()
            .ok_or_else(|| GraphError::unknown(name))
    }

    /// Link targets of a node sorted by link ordinal.
    ///
    /// petgraph iterates a node's edges newest-first, so the order is
    /// restored from the stored ordinal.
    fn ordered_targets(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        let mut edges: Vec<(usize, NodeIndex)> = self
            .graph
            .edges(idx)
            .map(|e| (e.weight().ordinal, e.target()))
            .collect();
        edges.sort_by_key(|(ordinal, _)| *ordinal);
        edges.into_iter().map(|(_, target)| target).collect()
    }
}

impl Default for PageGraph {
    fn default() -> Self {
        Self::new()
    }
}
