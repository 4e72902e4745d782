//! Configuration types for tree walking

/// Default number of levels below the root to descend.
pub const DEFAULT_MAX_DEPTH: usize = 5;

/// Configuration for walking and collecting a document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkerConfig {
    /// Levels below the root to visit. Must be at least 1.
    pub max_depth: usize,
    pub include_files: bool,
    pub include_folders: bool,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            include_files: true,
            include_folders: true,
        }
    }
}
