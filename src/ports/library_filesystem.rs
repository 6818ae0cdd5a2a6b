//! Read-only directory access over the code and project libraries.

use std::path::Path;

use crate::domain::AppError;

/// A named child of a library folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryEntry {
    pub name: String,
    pub is_dir: bool,
}

/// Port for listing library folders.
///
/// Absence is reported through `is_dir`, never as an error; callers decide how
/// to degrade.
pub trait LibraryFilesystem {
    /// Check whether a path is an existing directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// List the direct children of an existing directory.
    fn read_entries(&self, path: &Path) -> Result<Vec<LibraryEntry>, AppError>;
}
