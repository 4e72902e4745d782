//! TreeWalker - bounded-depth, depth-first traversal of a document store

use tracing::debug;

use crate::error::{SourceError, TraversalError};
use crate::source::{Node, NodeSource};

/// Depth-first walker over a [`NodeSource`].
///
/// Visiting order: the root first, then for every folder each sub-folder
/// (immediately followed by its own subtree), then the folder's files.
/// Depth is counted, not node identity, so `max_depth` bounds the walk even if
/// the store contains cycles.
pub struct TreeWalker<'s, S: NodeSource + ?Sized> {
    source: &'s S,
    max_depth: usize,
}

impl<'s, S: NodeSource + ?Sized> TreeWalker<'s, S> {
    /// `max_depth` below 1 is treated as 1.
    pub fn new(source: &'s S, max_depth: usize) -> Self {
        Self {
            source,
            max_depth: max_depth.max(1),
        }
    }

    /// Walk from `root`, calling `visit(ancestors, node)` for every node.
    ///
    /// `ancestors` runs from the root to the node's parent and is empty for
    /// the root itself. The first listing failure aborts the whole walk.
    pub fn walk<F>(&self, root: &Node, mut visit: F) -> Result<(), TraversalError>
    where
        F: FnMut(&[Node], &Node),
    {
        visit(&[], root);
        let mut ancestors = vec![root.clone()];
        self.walk_folder(&mut ancestors, 1, &mut visit)
    }

    /// Visit the children of the last node in `ancestors`, which sit at `depth`.
    fn walk_folder<F>(
        &self,
        ancestors: &mut Vec<Node>,
        depth: usize,
        visit: &mut F,
    ) -> Result<(), TraversalError>
    where
        F: FnMut(&[Node], &Node),
    {
        if depth > self.max_depth {
            return Ok(());
        }
        let Some(folder) = ancestors.last().cloned() else {
            return Ok(());
        };
        if !folder.is_folder() {
            return Ok(());
        }

        let sub_folders = self
            .source
            .child_folders(&folder)
            .map_err(|source| traversal_error(&folder, source))?;
        debug!(folder = folder.name(), depth, count = sub_folders.len(), "listed folders");

        for sub_folder in sub_folders {
            visit(ancestors.as_slice(), &sub_folder);
            ancestors.push(sub_folder);
            let result = self.walk_folder(ancestors, depth + 1, visit);
            ancestors.pop();
            result?;
        }

        let files = self
            .source
            .child_files(&folder)
            .map_err(|source| traversal_error(&folder, source))?;
        debug!(folder = folder.name(), depth, count = files.len(), "listed files");

        for file in &files {
            visit(ancestors.as_slice(), file);
        }
        Ok(())
    }
}

fn traversal_error(folder: &Node, source: SourceError) -> TraversalError {
    TraversalError {
        folder: folder.name().to_string(),
        id: folder.id().to_string(),
        source,
    }
}
