//! Directory listing with the library's missing-folder policy.

use std::io;
use std::path::Path;

use tracing::debug;

use crate::domain::AppError;
use crate::ports::{LibraryEntry, LibraryFilesystem};

/// Sorted names of the entries of `dir` accepted by `keep`.
///
/// A folder that does not exist, or vanishes while being read, lists as empty.
pub(crate) fn list_names<F, P>(library: &F, dir: &Path, keep: P) -> Result<Vec<String>, AppError>
where
    F: LibraryFilesystem + ?Sized,
    P: Fn(&LibraryEntry) -> bool,
{
    if !library.is_dir(dir) {
        debug!(dir = %dir.display(), "library folder missing");
        return Ok(Vec::new());
    }

    let entries = match library.read_entries(dir) {
        Ok(entries) => entries,
        Err(AppError::Io(err)) if err.kind() == io::ErrorKind::NotFound => {
            debug!(dir = %dir.display(), "library folder removed while listing");
            return Ok(Vec::new());
        }
        Err(err) => return Err(err),
    };

    let mut names: Vec<String> =
        entries.into_iter().filter(|entry| keep(entry)).map(|entry| entry.name).collect();
    names.sort();
    Ok(names)
}

/// Sub-folder names of `dir`.
pub(crate) fn list_folders<F>(library: &F, dir: &Path) -> Result<Vec<String>, AppError>
where
    F: LibraryFilesystem + ?Sized,
{
    list_names(library, dir, |entry| entry.is_dir)
}
