use std::io;

use thiserror::Error;

/// Library-wide error type for pipelaunch operations.
///
/// Missing library folders are not errors: lookups return empty lists for them.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure while reading an existing folder or spawning a process.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Config file named on the command line (or via env) does not exist.
    #[error("Config file not found: {0}")]
    ConfigFileMissing(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Stage identifier is invalid.
    #[error("Invalid stage '{0}': must be one of work, publish")]
    InvalidStage(String),

    /// Application identifier is invalid.
    #[error("Invalid application '{0}': must be one of maya, blender")]
    InvalidApplication(String),

    /// Package argument could not be parsed.
    #[error("Invalid package spec '{0}': expected NAME or NAME=REPO")]
    InvalidPackageSpec(String),

    /// `PACKAGES` and `PACKAGE_PATHS` hold a different number of entries.
    #[error("PACKAGES has {packages} entries but PACKAGE_PATHS has {paths}")]
    PackageListMismatch { packages: usize, paths: usize },

    /// Scene requested for launch is not present in the scenes folder.
    #[error("Scene '{scene}' not found in {dir}")]
    SceneNotFound { scene: String, dir: String },

    /// The external application could not be started.
    #[error("Failed to launch '{program}': {details}")]
    LaunchFailed { program: String, details: String },

    /// Interactive selection failed.
    #[error("{0}")]
    Prompt(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
