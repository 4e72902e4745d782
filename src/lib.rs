//! docindex - Index a document tree into a spreadsheet-style report

pub mod error;
pub mod index;
pub mod mime;
pub mod options;
pub mod output;
pub mod settings;
pub mod source;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{ConfigError, DestinationError, Error, Result, SourceError, TraversalError};
pub use index::{IndexSummary, generate, run, write_report};
pub use options::{Defaults, IndexOptions};
pub use output::{
    Cell, CellValue, ConsoleWriter, MarkdownWriter, RenderedReport, ReportWriter, Schema, Sheet,
    WorkbookWriter, render,
};
pub use settings::Settings;
pub use source::{LocalSource, ManifestNode, MemorySource, Node, NodeSource};
pub use tree::{PathEntry, TreeWalker, WalkerConfig, collect};
