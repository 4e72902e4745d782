//! Error types for indexing runs
//!
//! Each stage of the pipeline fails with its own error so the message can
//! name what caused it: a folder for traversal, a key for configuration, a
//! destination for writing.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure reported by a [`NodeSource`](crate::source::NodeSource).
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("no such node: {0}")]
    NotFound(String),

    #[error("permission denied: {0}")]
    PermissionDenied(String),

    #[error("listing failed: {0}")]
    Listing(String),

    #[error("invalid reference '{reference}': {reason}")]
    InvalidReference { reference: String, reason: String },

    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SourceError {
    /// Classify an I/O error raised while reading `path`.
    pub fn from_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::NotFound => SourceError::NotFound(path.display().to_string()),
            io::ErrorKind::PermissionDenied => {
                SourceError::PermissionDenied(path.display().to_string())
            }
            _ => SourceError::Io { path, source },
        }
    }
}

/// Enumerating the children of a folder failed; the whole walk is aborted.
#[derive(Debug, Error)]
#[error("cannot list folder '{folder}' ({id}): {source}")]
pub struct TraversalError {
    pub folder: String,
    pub id: String,
    #[source]
    pub source: SourceError,
}

/// Invalid settings or an unreadable settings or manifest file, raised before
/// any traversal starts.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("setting '{key}' must be {expected}, but was {actual}")]
    TypeMismatch {
        key: String,
        expected: String,
        actual: String,
    },

    #[error("invalid value for '{key}': {reason}")]
    InvalidValue { key: String, reason: String },

    #[error("settings table has no '{0}' column")]
    MissingColumn(String),

    #[error("malformed settings table: {0}")]
    MalformedTable(String),

    #[error("cannot read '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot parse '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// The destination sheet could not be cleared or written.
#[derive(Debug, Error)]
pub enum DestinationError {
    #[error("cannot write to '{destination}': {source}")]
    Io {
        destination: String,
        #[source]
        source: io::Error,
    },

    #[error("'{destination}' is not a valid workbook: {source}")]
    Format {
        destination: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Top-level error for a full indexing run.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Traversal(#[from] TraversalError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Destination(#[from] DestinationError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
