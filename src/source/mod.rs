//! Node model and the capability interface the indexer consumes
//!
//! The indexer never talks to a concrete store directly. It only needs to
//! list the folders and files directly under a folder, and to turn a root
//! reference into a [`Node`].
//!
//! - `local` - the local file system
//! - `memory` - an in-memory tree loaded from a JSON manifest

mod local;
mod memory;

use serde::Serialize;

use crate::error::SourceError;

pub use local::LocalSource;
pub use memory::{ManifestNode, MemorySource};

/// A file or folder handle in the document store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    File {
        id: String,
        name: String,
        url: String,
        mime_type: String,
    },
    Folder {
        id: String,
        name: String,
        url: String,
    },
}

impl Node {
    pub fn file(
        id: impl Into<String>,
        name: impl Into<String>,
        url: impl Into<String>,
        mime_type: impl Into<String>,
    ) -> Self {
        Node::File {
            id: id.into(),
            name: name.into(),
            url: url.into(),
            mime_type: mime_type.into(),
        }
    }

    pub fn folder(id: impl Into<String>, name: impl Into<String>, url: impl Into<String>) -> Self {
        Node::Folder {
            id: id.into(),
            name: name.into(),
            url: url.into(),
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Node::File { id, .. } => id,
            Node::Folder { id, .. } => id,
        }
    }

    /// Display name, used for sort keys and rendered paths.
    pub fn name(&self) -> &str {
        match self {
            Node::File { name, .. } => name,
            Node::Folder { name, .. } => name,
        }
    }

    pub fn url(&self) -> &str {
        match self {
            Node::File { url, .. } => url,
            Node::Folder { url, .. } => url,
        }
    }

    /// MIME type of a file. Folders have none.
    pub fn mime_type(&self) -> Option<&str> {
        match self {
            Node::File { mime_type, .. } => Some(mime_type),
            Node::Folder { .. } => None,
        }
    }

    pub fn is_file(&self) -> bool {
        matches!(self, Node::File { .. })
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, Node::Folder { .. })
    }
}

/// Read-only access to a hierarchical document store.
///
/// Children may come back in any order; callers sort them themselves.
/// Implementations are only asked to list children of folders.
pub trait NodeSource {
    /// Direct sub-folders of `folder`.
    fn child_folders(&self, folder: &Node) -> Result<Vec<Node>, SourceError>;

    /// Direct files of `folder`.
    fn child_files(&self, folder: &Node) -> Result<Vec<Node>, SourceError>;

    /// Look up a node by URL or identifier.
    fn resolve(&self, reference: &str) -> Result<Node, SourceError>;
}

impl<S: NodeSource + ?Sized> NodeSource for &S {
    fn child_folders(&self, folder: &Node) -> Result<Vec<Node>, SourceError> {
        (**self).child_folders(folder)
    }

    fn child_files(&self, folder: &Node) -> Result<Vec<Node>, SourceError> {
        (**self).child_files(folder)
    }

    fn resolve(&self, reference: &str) -> Result<Node, SourceError> {
        (**self).resolve(reference)
    }
}
