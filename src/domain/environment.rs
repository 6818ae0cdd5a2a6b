//! Environment variables exchanged with launched applications.

use indexmap::IndexMap;

use crate::domain::AppError;

pub const PACKAGES: &str = "PACKAGES";
pub const PACKAGE_PATHS: &str = "PACKAGE_PATHS";
pub const PROJECT: &str = "PROJECT";
pub const ASSET_TYPE: &str = "ASSET_TYPE";
pub const ASSET: &str = "ASSET";
pub const SEQUENCE: &str = "SEQUENCE";
pub const SHOT: &str = "SHOT";
pub const DEPARTMENT: &str = "DEPARTMENT";

/// Separator used by `PACKAGES` and `PACKAGE_PATHS`.
pub const LIST_SEPARATOR: char = ';';

/// Ordered environment overrides for a child process.
pub type EnvVars = IndexMap<String, String>;

/// Split a `;`-delimited variable value. Unset or empty values yield no entries.
pub fn split_list(value: Option<&str>) -> Vec<String> {
    match value {
        Some(value) if !value.is_empty() => {
            value.split(LIST_SEPARATOR).map(str::to_string).collect()
        }
        _ => Vec::new(),
    }
}

pub fn join_list<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items.into_iter().map(|item| item.as_ref().to_string()).collect::<Vec<_>>().join(";")
}

/// Pair `PACKAGES` entries with `PACKAGE_PATHS` entries by position.
///
/// The two lists are only meaningful together when they have the same length.
pub fn pair_package_lists(
    packages: Vec<String>,
    paths: Vec<String>,
) -> Result<Vec<(String, String)>, AppError> {
    if packages.len() != paths.len() {
        return Err(AppError::PackageListMismatch { packages: packages.len(), paths: paths.len() });
    }
    Ok(packages.into_iter().zip(paths).collect())
}
