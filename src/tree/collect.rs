//! Entry collection: walk, filter, and sort by full path

use crate::error::TraversalError;
use crate::source::{Node, NodeSource};

use super::collate;
use super::config::WalkerConfig;
use super::entry::PathEntry;
use super::filter::EntryFilter;
use super::walker::TreeWalker;

/// Walk `root` and return the kept entries sorted by their joined route.
///
/// The filter drops entries after they are visited, so the children of an
/// excluded folder are still reached. The sort is stable: entries with equal
/// keys keep traversal order.
pub fn collect<S: NodeSource + ?Sized>(
    source: &S,
    root: &Node,
    config: &WalkerConfig,
    separator: &str,
) -> Result<Vec<PathEntry>, TraversalError> {
    let filter = EntryFilter::from_config(config);
    let mut entries = Vec::new();

    TreeWalker::new(source, config.max_depth).walk(root, |ancestors, node| {
        if filter.is_included(node) {
            entries.push(PathEntry::new(ancestors, node));
        }
    })?;

    Ok(sort_entries(entries, separator))
}

/// Stable sort by locale-aware comparison of each entry's sort key.
pub fn sort_entries(entries: Vec<PathEntry>, separator: &str) -> Vec<PathEntry> {
    let mut keyed: Vec<(String, PathEntry)> = entries
        .into_iter()
        .map(|entry| (entry.sort_key(separator), entry))
        .collect();
    keyed.sort_by(|a, b| collate::compare(&a.0, &b.0));
    keyed.into_iter().map(|(_, entry)| entry).collect()
}
