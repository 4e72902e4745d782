//! PathEntry - one discovered node plus the route that reached it

use crate::source::Node;

use super::utils::join_names;

/// An immutable record of a visited node and its ancestor chain.
///
/// `full_route()` always ends with the node itself, so its length is the
/// node's depth below the traversal root plus one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathEntry {
    route: Vec<Node>,
}

impl PathEntry {
    pub fn new(ancestors: &[Node], node: &Node) -> Self {
        let mut route = Vec::with_capacity(ancestors.len() + 1);
        route.extend_from_slice(ancestors);
        route.push(node.clone());
        Self { route }
    }

    pub fn node(&self) -> &Node {
        // route is never empty
        &self.route[self.route.len() - 1]
    }

    /// Root to immediate parent, excluding the node. Empty for the root.
    pub fn ancestors(&self) -> &[Node] {
        &self.route[..self.route.len() - 1]
    }

    /// Ancestors followed by the node itself.
    pub fn full_route(&self) -> &[Node] {
        &self.route
    }

    /// Depth below the traversal root (0 for the root).
    pub fn depth(&self) -> usize {
        self.route.len() - 1
    }

    /// Route names joined by `separator`; the key entries are sorted by.
    pub fn sort_key(&self, separator: &str) -> String {
        join_names(&self.route, separator)
    }
}
