//! LocalSource - exposes a directory tree on disk as a document store

use std::fs::{self, FileType};
use std::path::{Path, PathBuf};

use tracing::debug;
use url::Url;

use crate::error::SourceError;
use crate::mime;

use super::{Node, NodeSource};

/// Document store backed by the local file system.
///
/// Directories are folders and regular files are files. Symbolic links and
/// special files are skipped so every listed node has a strict folder/file
/// kind. Node ids and URLs are both `file://` URLs of the canonical path.
/// The URL percent-encodes the raw path bytes, so names that are not valid
/// UTF-8 still map back to the same path.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalSource;

impl LocalSource {
    pub fn new() -> Self {
        Self
    }

    fn node_for(path: &Path, file_type: FileType) -> Option<Node> {
        let name = display_name(path);
        let url = Url::from_file_path(path).ok()?.to_string();
        let id = url.clone();

        if file_type.is_dir() {
            Some(Node::folder(id, name, url))
        } else if file_type.is_file() {
            Some(Node::file(id, name, url, mime::for_path(path)))
        } else {
            None
        }
    }

    /// List the direct children of `folder` that are directories (`dirs`)
    /// or regular files (`!dirs`).
    fn list(&self, folder: &Node, dirs: bool) -> Result<Vec<Node>, SourceError> {
        if !folder.is_folder() {
            return Ok(Vec::new());
        }

        let dir = url_to_path(folder.id())?;
        let path = dir.as_path();
        let entries = fs::read_dir(path).map_err(|e| SourceError::from_io(path, e))?;

        let mut nodes = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| SourceError::from_io(path, e))?;
            let entry_path = entry.path();
            let file_type = entry
                .file_type()
                .map_err(|e| SourceError::from_io(&entry_path, e))?;

            // Skip symlinks to keep the folder/file distinction strict
            if file_type.is_symlink() {
                debug!(path = %entry_path.display(), "skipping symlink");
                continue;
            }
            if file_type.is_dir() != dirs {
                continue;
            }

            match Self::node_for(&entry_path, file_type) {
                Some(node) => nodes.push(node),
                None => debug!(path = %entry_path.display(), "skipping special file"),
            }
        }
        Ok(nodes)
    }
}

impl NodeSource for LocalSource {
    fn child_folders(&self, folder: &Node) -> Result<Vec<Node>, SourceError> {
        self.list(folder, true)
    }

    fn child_files(&self, folder: &Node) -> Result<Vec<Node>, SourceError> {
        self.list(folder, false)
    }

    /// Accepts a plain path or a `file://` URL.
    fn resolve(&self, reference: &str) -> Result<Node, SourceError> {
        let path = if reference.starts_with("file://") {
            url_to_path(reference)?
        } else {
            PathBuf::from(reference)
        };

        let path = path
            .canonicalize()
            .map_err(|e| SourceError::from_io(&path, e))?;
        let file_type = fs::metadata(&path)
            .map_err(|e| SourceError::from_io(&path, e))?
            .file_type();

        Self::node_for(&path, file_type).ok_or_else(|| SourceError::InvalidReference {
            reference: reference.to_string(),
            reason: "not a file or folder".to_string(),
        })
    }
}

/// Last path component, or the whole path for a file system root.
fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

/// Path of a `file://` URL, decoding percent-escaped bytes.
fn url_to_path(reference: &str) -> Result<PathBuf, SourceError> {
    let url = Url::parse(reference).map_err(|e| SourceError::InvalidReference {
        reference: reference.to_string(),
        reason: e.to_string(),
    })?;
    url.to_file_path()
        .map_err(|_| SourceError::InvalidReference {
            reference: reference.to_string(),
            reason: "not a local file URL".to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTree;

    fn names(nodes: &[Node]) -> Vec<String> {
        let mut names: Vec<String> = nodes.iter().map(|n| n.name().to_string()).collect();
        names.sort();
        names
    }

    #[test]
    fn test_resolve_directory_is_folder() {
        let tree = TestTree::new();
        tree.add_dir("docs");

        let source = LocalSource::new();
        let node = source.resolve(tree.path().join("docs").to_str().unwrap()).unwrap();
        assert!(node.is_folder());
        assert_eq!(node.name(), "docs");
        assert!(node.url().starts_with("file://"));
    }

    #[test]
    fn test_resolve_file_url() {
        let tree = TestTree::new();
        let file = tree.add_file("report.pdf", "%PDF");
        let url = Url::from_file_path(file.canonicalize().unwrap()).unwrap();

        let node = LocalSource::new().resolve(url.as_str()).unwrap();
        assert!(node.is_file());
        assert_eq!(node.mime_type(), Some("application/pdf"));
    }

    #[test]
    fn test_resolve_missing_path() {
        let tree = TestTree::new();
        let missing = tree.path().join("nope");
        let err = LocalSource::new()
            .resolve(missing.to_str().unwrap())
            .unwrap_err();
        assert!(matches!(err, SourceError::NotFound(_)), "got {:?}", err);
    }

    #[test]
    fn test_children_split_by_kind() {
        let tree = TestTree::new();
        tree.add_file("a.txt", "a");
        tree.add_file("sub/b.txt", "b");
        tree.add_dir("empty");

        let source = LocalSource::new();
        let root = source.resolve(tree.path().to_str().unwrap()).unwrap();

        let folders = source.child_folders(&root).unwrap();
        let files = source.child_files(&root).unwrap();
        assert_eq!(names(&folders), vec!["empty", "sub"]);
        assert_eq!(names(&files), vec!["a.txt"]);
        assert!(folders.iter().all(Node::is_folder));
        assert!(files.iter().all(Node::is_file));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinks_are_skipped() {
        let tree = TestTree::new();
        tree.add_file("real/file.txt", "x");
        std::os::unix::fs::symlink(tree.path().join("real"), tree.path().join("link"))
            .expect("Failed to create symlink");

        let source = LocalSource::new();
        let root = source.resolve(tree.path().to_str().unwrap()).unwrap();
        let folders = source.child_folders(&root).unwrap();
        assert_eq!(names(&folders), vec!["real"]);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_non_utf8_folder_name_round_trips() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        use crate::tree::{WalkerConfig, collect};

        let tree = TestTree::new();
        let bad = tree.path().join(OsStr::from_bytes(b"bad\xffdir"));
        fs::create_dir(&bad).expect("Failed to create dir");
        fs::write(bad.join("x.txt"), "x").expect("Failed to write file");

        let source = LocalSource::new();
        let root = source.resolve(tree.path().to_str().unwrap()).unwrap();
        let folders = source.child_folders(&root).unwrap();
        assert_eq!(folders.len(), 1);
        assert_eq!(folders[0].name(), "bad\u{fffd}dir");

        let files = source.child_files(&folders[0]).unwrap();
        assert_eq!(names(&files), vec!["x.txt"]);

        let entries = collect(&source, &root, &WalkerConfig::default(), " > ").unwrap();
        assert_eq!(entries.len(), 3);
    }

    #[test]
    fn test_ids_resolve_back_to_the_same_node() {
        let tree = TestTree::new();
        tree.add_file("sub dir/a.txt", "a");

        let source = LocalSource::new();
        let root = source.resolve(tree.path().to_str().unwrap()).unwrap();
        let folder = source.child_folders(&root).unwrap().remove(0);
        assert!(folder.id().starts_with("file://"));
        assert_eq!(source.resolve(folder.id()).unwrap(), folder);
    }

    #[test]
    fn test_file_has_no_children() {
        let tree = TestTree::new();
        let file = tree.add_file("a.txt", "a");

        let source = LocalSource::new();
        let node = source.resolve(file.to_str().unwrap()).unwrap();
        assert!(source.child_folders(&node).unwrap().is_empty());
        assert!(source.child_files(&node).unwrap().is_empty());
    }
}
