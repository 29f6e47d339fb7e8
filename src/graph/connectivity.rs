//! Reachability queries over the page graph.
//!
//! Depth-first search with an explicit work stack. Pages carry a
//! `visited` flag for the duration of one query; every query clears all
//! flags before returning.

use petgraph::graph::NodeIndex;
use tracing::debug;

use super::engine::PageGraph;
use super::types::Exploration;
use crate::error::GraphResult;

impl PageGraph {
    /// Whether `to` is reachable from `from` along zero or more links.
    ///
    /// Fails with `UnknownPage` if either name is absent; no traversal
    /// happens in that case.
    pub fn is_connected(&mut self, from: &str, to: &str) -> GraphResult<bool> {
        self.explore(from, to).map(|exploration| exploration.connected)
    }

    /// Run a reachability query and report the pages it marked, in
    /// marking order.
    ///
    /// Exploration order matches the recursive formulation: a page is
    /// compared against the target before its visited flag is checked,
    /// and links are followed in insertion order, stopping at the first
    /// success.
    pub fn explore(&mut self, from: &str, to: &str) -> GraphResult<Exploration> {
        let start = self.index_of(from)?;
        let target = self.index_of(to)?;

        let exploration = self.search(start, target);
        self.reset_visits();
        debug_assert!(!self.has_marked_pages());

        debug!(
            from,
            to,
            connected = exploration.connected,
            explored = exploration.visited.len(),
            "reachability query"
        );
        Ok(exploration)
    }

    /// Clear the visited flag on every page.
    pub fn reset_visits(&mut self) {
        for page in self.inner_graph_mut().node_weights_mut() {
            page.visited = false;
        }
    }

    fn search(&mut self, start: NodeIndex, target: NodeIndex) -> Exploration {
        let mut exploration = Exploration::default();
        let mut stack = vec![start];

        while let Some(idx) = stack.pop() {
            if idx == target {
                exploration.connected = true;
                break;
            }

            let page = &mut self.inner_graph_mut()[idx];
            if page.visited {
                continue;
            }
            page.visited = true;
            exploration.visited.push(page.name.clone());

            // petgraph lists neighbors newest-first, which leaves the
            // oldest link on top of the stack.
            stack.extend(self.inner_graph().neighbors(idx));
        }

        exploration
    }

    /// Whether any page is still marked. Only true mid-query.
    fn has_marked_pages(&self) -> bool {
        self.inner_graph().node_weights().any(|page| page.visited)
    }
}
