//! Test utilities for building document trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::source::ManifestNode;

/// A temporary directory tree for testing the local source.
///
/// The directory is automatically cleaned up when dropped.
pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Add an (empty) directory.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}

/// `A` containing folder `B` (holding file `C`) and file `D`.
pub fn sample_tree() -> ManifestNode {
    ManifestNode::folder(
        "A",
        vec![
            ManifestNode::folder("B", vec![ManifestNode::file("C", "text/plain")]),
            ManifestNode::file("D", "application/pdf"),
        ],
    )
}

/// A single chain of `depth` nested folders below `root`. Level `n` folder
/// is named `dN`; `root` and every folder above the deepest hold one file
/// (`f0.txt` in `root`, `fN.txt` in `dN`), the deepest folder is empty.
pub fn chain_tree(depth: usize) -> ManifestNode {
    let mut node = ManifestNode::folder(&format!("d{}", depth), vec![]);
    for level in (1..depth).rev() {
        node = ManifestNode::folder(
            &format!("d{}", level),
            vec![node, ManifestNode::file(&format!("f{}.txt", level), "text/plain")],
        );
    }
    if depth == 0 {
        return ManifestNode::folder("root", vec![]);
    }
    ManifestNode::folder("root", vec![node, ManifestNode::file("f0.txt", "text/plain")])
}

/// A wide tree for benchmarks: `breadth` folders per level, `files` files per
/// folder, `depth` levels.
pub fn wide_tree(depth: usize, breadth: usize, files: usize) -> ManifestNode {
    fn build(name: String, level: usize, depth: usize, breadth: usize, files: usize) -> ManifestNode {
        let mut children = Vec::new();
        if level < depth {
            for i in 0..breadth {
                children.push(build(format!("folder {}", i), level + 1, depth, breadth, files));
            }
        }
        for i in 0..files {
            children.push(ManifestNode::file(&format!("file {}.txt", i), "text/plain"));
        }
        ManifestNode::folder(&name, children)
    }
    build("root".to_string(), 0, depth, breadth, files)
}
