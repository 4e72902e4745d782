//! MemorySource - a document tree held in memory
//!
//! Trees are described by a JSON manifest, typically an export of a remote
//! store:
//!
//! ```json
//! { "type": "folder", "name": "A", "url": "https://drive.example/A",
//!   "children": [
//!     { "type": "folder", "name": "B", "children": [
//!         { "type": "file", "name": "C", "mime_type": "text/plain" } ] },
//!     { "type": "file", "name": "D" } ] }
//! ```
//!
//! `id` and `url` are optional and derived from the position in the tree when
//! absent. A folder with a `listing_error` fails whenever its children are
//! listed, the way an inaccessible folder does in a live store.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{ConfigError, SourceError};
use crate::mime::DEFAULT_MIME_TYPE;

use super::{Node, NodeSource};

/// One node of a manifest tree.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ManifestNode {
    File {
        name: String,
        #[serde(default)]
        id: Option<String>,
        #[serde(default)]
        url: Option<String>,
        #[serde(default)]
        mime_type: Option<String>,
    },
    Folder {
        name: String,
        #[serde(default)]
        id: Option<String>,
        #[serde(default)]
        url: Option<String>,
        #[serde(default)]
        children: Vec<ManifestNode>,
        #[serde(default)]
        listing_error: Option<String>,
    },
}

impl ManifestNode {
    pub fn file(name: &str, mime_type: &str) -> Self {
        ManifestNode::File {
            name: name.to_string(),
            id: None,
            url: None,
            mime_type: Some(mime_type.to_string()),
        }
    }

    pub fn folder(name: &str, children: Vec<ManifestNode>) -> Self {
        ManifestNode::Folder {
            name: name.to_string(),
            id: None,
            url: None,
            children,
            listing_error: None,
        }
    }

    /// Mark a folder as unreadable. No effect on files.
    pub fn with_listing_error(mut self, message: &str) -> Self {
        if let ManifestNode::Folder { listing_error, .. } = &mut self {
            *listing_error = Some(message.to_string());
        }
        self
    }

    /// Override the URL derived from the node's position.
    pub fn with_url(mut self, new_url: &str) -> Self {
        match &mut self {
            ManifestNode::File { url, .. } | ManifestNode::Folder { url, .. } => {
                *url = Some(new_url.to_string());
            }
        }
        self
    }
}

#[derive(Debug, Default)]
struct Listing {
    folders: Vec<Node>,
    files: Vec<Node>,
    error: Option<String>,
}

/// Document store backed by an in-memory tree.
#[derive(Debug)]
pub struct MemorySource {
    root: Node,
    listings: HashMap<String, Listing>,
    by_reference: HashMap<String, Node>,
}

impl MemorySource {
    pub fn new(root: ManifestNode) -> Self {
        let mut source = Self {
            root: Node::folder("", "", ""),
            listings: HashMap::new(),
            by_reference: HashMap::new(),
        };
        source.root = source.insert(root, "");
        source
    }

    /// Load a manifest from a JSON file.
    pub fn from_manifest_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let root: ManifestNode =
            serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self::new(root))
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Register `manifest` under the parent id and return its node.
    fn insert(&mut self, manifest: ManifestNode, parent_id: &str) -> Node {
        let node = match manifest {
            ManifestNode::File {
                name,
                id,
                url,
                mime_type,
            } => {
                let id = id.unwrap_or_else(|| self.derive_id(parent_id, &name));
                let url = url.unwrap_or_else(|| format!("memory://{}", id));
                Node::file(
                    id,
                    name,
                    url,
                    mime_type.unwrap_or_else(|| DEFAULT_MIME_TYPE.to_string()),
                )
            }
            ManifestNode::Folder {
                name,
                id,
                url,
                children,
                listing_error,
            } => {
                let id = id.unwrap_or_else(|| self.derive_id(parent_id, &name));
                let url = url.unwrap_or_else(|| format!("memory://{}", id));
                // Reserve the id before the children claim theirs
                self.listings.insert(id.clone(), Listing::default());
                let mut listing = Listing {
                    error: listing_error,
                    ..Default::default()
                };
                for child in children {
                    let child = self.insert(child, &id);
                    if child.is_folder() {
                        listing.folders.push(child);
                    } else {
                        listing.files.push(child);
                    }
                }
                self.listings.insert(id.clone(), listing);
                Node::folder(id, name, url)
            }
        };

        self.by_reference.insert(node.id().to_string(), node.clone());
        self.by_reference.insert(node.url().to_string(), node.clone());
        node
    }

    /// `parent/name`, with a `#n` suffix when a sibling already took it.
    fn derive_id(&self, parent_id: &str, name: &str) -> String {
        let taken =
            |id: &str| self.listings.contains_key(id) || self.by_reference.contains_key(id);
        let base = child_id(parent_id, name);
        if !taken(&base) {
            return base;
        }
        let mut n = 2;
        loop {
            let id = format!("{}#{}", base, n);
            if !taken(&id) {
                return id;
            }
            n += 1;
        }
    }

    fn listing(&self, folder: &Node) -> Result<Option<&Listing>, SourceError> {
        if !folder.is_folder() {
            return Ok(None);
        }
        let listing = self
            .listings
            .get(folder.id())
            .ok_or_else(|| SourceError::NotFound(folder.id().to_string()))?;
        if let Some(ref message) = listing.error {
            return Err(SourceError::Listing(message.clone()));
        }
        Ok(Some(listing))
    }
}

fn child_id(parent_id: &str, name: &str) -> String {
    if parent_id.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", parent_id, name)
    }
}

impl NodeSource for MemorySource {
    fn child_folders(&self, folder: &Node) -> Result<Vec<Node>, SourceError> {
        Ok(self
            .listing(folder)?
            .map(|l| l.folders.clone())
            .unwrap_or_default())
    }

    fn child_files(&self, folder: &Node) -> Result<Vec<Node>, SourceError> {
        Ok(self
            .listing(folder)?
            .map(|l| l.files.clone())
            .unwrap_or_default())
    }

    fn resolve(&self, reference: &str) -> Result<Node, SourceError> {
        self.by_reference
            .get(reference)
            .cloned()
            .ok_or_else(|| SourceError::NotFound(reference.to_string()))
    }
}
