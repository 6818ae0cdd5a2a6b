//! Launcher configuration loading from disk.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::domain::launcher_config::parse_config_content;
use crate::domain::{AppError, LauncherConfig};

/// Load the launcher configuration.
///
/// Without a path the built-in pipeline defaults are used. A path that names a
/// missing file is an error rather than a silent fallback.
pub fn load_config(path: Option<&Path>) -> Result<LauncherConfig, AppError> {
    let Some(path) = path else {
        debug!("no config file given, using defaults");
        return Ok(LauncherConfig::default());
    };

    if !path.is_file() {
        return Err(AppError::ConfigFileMissing(path.display().to_string()));
    }

    debug!(path = %path.display(), "loading config");
    let content = fs::read_to_string(path)?;
    parse_config_content(&content)
}
