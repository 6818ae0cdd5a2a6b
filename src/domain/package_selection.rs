//! Packages chosen for a launch, each bound to the repo it is taken from.

use std::path::Path;
use std::str::FromStr;

use indexmap::IndexMap;

use crate::domain::environment::{self, EnvVars};
use crate::domain::{AppError, library_paths};

/// Repo used when a package is named without one.
pub const DEFAULT_REPO: &str = "local";

/// Ordered mapping from package name to its chosen repo.
///
/// Insertion order drives the order of `PACKAGES` and `PACKAGE_PATHS`, so the
/// two published lists are aligned by construction. Selecting a package again
/// rebinds it to the new repo and keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageSelection {
    packages: IndexMap<String, String>,
}

impl PackageSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, package: impl Into<String>, repo: impl Into<String>) {
        self.packages.insert(package.into(), repo.into());
    }

    pub fn with(mut self, package: impl Into<String>, repo: impl Into<String>) -> Self {
        self.select(package, repo);
        self
    }

    /// `(package, repo)` pairs in selection order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.packages.iter().map(|(package, repo)| (package.as_str(), repo.as_str()))
    }

    pub fn package_names(&self) -> Vec<&str> {
        self.packages.keys().map(String::as_str).collect()
    }

    /// `<code_root>/<repo>/<package>` for every selected package, in order.
    pub fn package_paths(&self, code_root: &Path) -> Vec<String> {
        self.iter()
            .map(|(package, repo)| {
                let dir = library_paths::package_dir(code_root, repo, package);
                dir.to_string_lossy().into_owned()
            })
            .collect()
    }

    /// `PACKAGES` and `PACKAGE_PATHS` for this selection.
    pub fn env_vars(&self, code_root: &Path) -> EnvVars {
        let mut vars = EnvVars::new();
        vars.insert(
            environment::PACKAGES.to_string(),
            environment::join_list(self.package_names()),
        );
        vars.insert(
            environment::PACKAGE_PATHS.to_string(),
            environment::join_list(self.package_paths(code_root)),
        );
        vars
    }
}

/// One `NAME` or `NAME=REPO` argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageSpec {
    pub package: String,
    pub repo: String,
}

impl FromStr for PackageSpec {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (package, repo) = match s.split_once('=') {
            Some((package, repo)) => (package.trim(), repo.trim()),
            None => (s.trim(), DEFAULT_REPO),
        };
        if package.is_empty() || repo.is_empty() {
            return Err(AppError::InvalidPackageSpec(s.to_string()));
        }
        Ok(PackageSpec { package: package.to_string(), repo: repo.to_string() })
    }
}

impl FromIterator<PackageSpec> for PackageSelection {
    fn from_iter<T: IntoIterator<Item = PackageSpec>>(iter: T) -> Self {
        let mut selection = PackageSelection::new();
        for spec in iter {
            selection.select(spec.package, spec.repo);
        }
        selection
    }
}
