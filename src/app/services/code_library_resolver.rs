//! Code-library lookups: repos, packages and the packages loaded into the environment.

use std::path::Path;

use tracing::debug;

use crate::app::services::folder_listing::list_folders;
use crate::domain::environment::{self, pair_package_lists, split_list};
use crate::domain::{AppError, library_paths};
use crate::ports::{EnvironmentReader, LibraryFilesystem};

/// Resolves `<code_root>/<repo>/<package>` folders.
pub struct CodeLibraryResolver<'a, F: LibraryFilesystem, E: EnvironmentReader> {
    library: &'a F,
    environment: &'a E,
    root: &'a Path,
}

impl<'a, F: LibraryFilesystem, E: EnvironmentReader> CodeLibraryResolver<'a, F, E> {
    pub fn new(library: &'a F, environment: &'a E, root: &'a Path) -> Self {
        Self { library, environment, root }
    }

    /// The code library folder.
    pub fn code_root(&self) -> &Path {
        self.root
    }

    /// Repo folders of the code library.
    pub fn list_repos(&self) -> Result<Vec<String>, AppError> {
        list_folders(self.library, self.root)
    }

    /// Package folders of `repo`; empty when the repo folder does not exist.
    pub fn list_packages(&self, repo: &str) -> Result<Vec<String>, AppError> {
        debug!(repo, "listing packages");
        list_folders(self.library, &library_paths::repo_dir(self.root, repo))
    }

    /// Packages loaded into the environment (`PACKAGES`).
    pub fn environment_packages(&self) -> Vec<String> {
        split_list(self.environment.var(environment::PACKAGES).as_deref())
    }

    /// Package paths loaded into the environment (`PACKAGE_PATHS`).
    pub fn environment_package_paths(&self) -> Vec<String> {
        split_list(self.environment.var(environment::PACKAGE_PATHS).as_deref())
    }

    /// Loaded packages paired with their paths; fails when the two lists differ in length.
    pub fn environment_package_pairs(&self) -> Result<Vec<(String, String)>, AppError> {
        pair_package_lists(self.environment_packages(), self.environment_package_paths())
    }
}
