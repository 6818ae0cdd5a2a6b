use std::fs;
use std::path::Path;

use tracing::{trace, warn};

use crate::domain::AppError;
use crate::ports::{LibraryEntry, LibraryFilesystem};

/// Library access backed by `std::fs`.
///
/// Entries whose names are not valid UTF-8 are skipped with a warning.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdLibraryFilesystem;

impl StdLibraryFilesystem {
    pub fn new() -> Self {
        Self
    }
}

impl LibraryFilesystem for StdLibraryFilesystem {
    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn read_entries(&self, path: &Path) -> Result<Vec<LibraryEntry>, AppError> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(path)? {
            let entry = entry?;
            let name = match entry.file_name().into_string() {
                Ok(name) => name,
                Err(raw) => {
                    warn!(dir = %path.display(), name = ?raw, "skipping non UTF-8 entry");
                    continue;
                }
            };
            // Follows symlinks so linked folders list like real ones.
            let is_dir = entry.path().is_dir();
            entries.push(LibraryEntry { name, is_dir });
        }
        trace!(path = %path.display(), count = entries.len(), "read library folder");
        Ok(entries)
    }
}
