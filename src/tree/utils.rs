//! Shared utility functions for routes

use crate::source::Node;

/// Path separator used when none is configured.
pub const DEFAULT_PATH_SEPARATOR: &str = " > ";

/// Join the display names of `nodes` with `separator`.
pub fn join_names(nodes: &[Node], separator: &str) -> String {
    let mut value = String::new();
    for (i, node) in nodes.iter().enumerate() {
        if i > 0 {
            value.push_str(separator);
        }
        value.push_str(node.name());
    }
    value
}
