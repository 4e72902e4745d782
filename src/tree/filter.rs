//! Entry filtering by node kind

use crate::source::Node;

use super::config::WalkerConfig;

/// Keeps or drops visited nodes by kind. Applied after the visit, so it
/// never changes which nodes the walker reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryFilter {
    include_files: bool,
    include_folders: bool,
}

impl EntryFilter {
    pub fn new(include_files: bool, include_folders: bool) -> Self {
        Self {
            include_files,
            include_folders,
        }
    }

    pub fn from_config(config: &WalkerConfig) -> Self {
        Self::new(config.include_files, config.include_folders)
    }

    /// Check if a node should appear in the result.
    pub fn is_included(&self, node: &Node) -> bool {
        match node {
            Node::File { .. } => self.include_files,
            Node::Folder { .. } => self.include_folders,
        }
    }
}
