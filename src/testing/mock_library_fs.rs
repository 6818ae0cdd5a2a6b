//! Test double for `LibraryFilesystem`.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::{LibraryEntry, LibraryFilesystem};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Node {
    Dir,
    File,
    /// Reported as a directory, but reading it fails with `NotFound`.
    Vanishing,
    /// Reported as a directory, but reading it fails with `PermissionDenied`.
    Unreadable,
}

/// In-memory library tree for unit tests.
#[derive(Debug, Clone, Default)]
pub struct MockLibraryFs {
    nodes: BTreeMap<PathBuf, Node>,
}

impl MockLibraryFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a directory and all its ancestors.
    pub fn with_dir(mut self, path: &str) -> Self {
        self.insert(Path::new(path), Node::Dir);
        self
    }

    /// Add a file and all its ancestor directories.
    pub fn with_file(mut self, path: &str) -> Self {
        self.insert(Path::new(path), Node::File);
        self
    }

    pub fn with_vanishing_dir(mut self, path: &str) -> Self {
        self.insert(Path::new(path), Node::Vanishing);
        self
    }

    pub fn with_unreadable_dir(mut self, path: &str) -> Self {
        self.insert(Path::new(path), Node::Unreadable);
        self
    }

    fn insert(&mut self, path: &Path, node: Node) {
        for ancestor in path.ancestors().skip(1) {
            if ancestor.as_os_str().is_empty() {
                continue;
            }
            self.nodes.entry(ancestor.to_path_buf()).or_insert(Node::Dir);
        }
        self.nodes.insert(path.to_path_buf(), node);
    }
}

impl LibraryFilesystem for MockLibraryFs {
    fn is_dir(&self, path: &Path) -> bool {
        matches!(self.nodes.get(path), Some(Node::Dir | Node::Vanishing | Node::Unreadable))
    }

    fn read_entries(&self, path: &Path) -> Result<Vec<LibraryEntry>, AppError> {
        match self.nodes.get(path) {
            Some(Node::Dir) => {}
            Some(Node::Unreadable) => {
                return Err(io::Error::new(io::ErrorKind::PermissionDenied, "mock denied").into());
            }
            _ => return Err(io::Error::new(io::ErrorKind::NotFound, "mock missing").into()),
        }

        Ok(self
            .nodes
            .iter()
            .filter(|(child, _)| child.parent() == Some(path))
            .filter_map(|(child, node)| {
                let name = child.file_name()?.to_string_lossy().into_owned();
                Some(LibraryEntry { name, is_dir: *node != Node::File })
            })
            .collect())
    }
}
