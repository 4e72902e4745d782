//! Document tree walking and entry collection
//!
//! - `TreeWalker`: bounded-depth, depth-first traversal of a `NodeSource`
//! - `collect`: walks, filters by kind, and sorts entries by full path

mod collate;
mod collect;
mod config;
mod entry;
mod filter;
mod utils;
mod walker;

// Re-export public types
pub use collate::compare as compare_names;
pub use collect::{collect, sort_entries};
pub use config::{DEFAULT_MAX_DEPTH, WalkerConfig};
pub use entry::PathEntry;
pub use filter::EntryFilter;
pub use utils::{DEFAULT_PATH_SEPARATOR, join_names};
pub use walker::TreeWalker;
