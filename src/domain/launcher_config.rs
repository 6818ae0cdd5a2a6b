//! Launcher configuration loaded from TOML.

use std::path::PathBuf;

use serde::Deserialize;

use crate::domain::{AppError, DccApp, LaunchMode};

/// Root of the code library when none is configured.
pub const DEFAULT_CODE_ROOT: &str = "D:/pipeline/code";
/// Root of the project library when none is configured.
pub const DEFAULT_PROJECT_ROOT: &str = "D:/pipeline/projects";

/// Launcher configuration.
///
/// ```toml
/// code_root = "D:/pipeline/code"
/// project_root = "D:/pipeline/projects"
/// launch_mode = "direct"
///
/// [maya]
/// executable = "C:/Program Files/Autodesk/Maya2020/bin/maya.exe"
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LauncherConfig {
    #[serde(default = "default_code_root")]
    pub code_root: PathBuf,
    #[serde(default = "default_project_root")]
    pub project_root: PathBuf,
    #[serde(default)]
    pub launch_mode: LaunchMode,
    #[serde(default)]
    pub maya: AppSettings,
    #[serde(default)]
    pub blender: AppSettings,
}

/// Per-application settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppSettings {
    /// Installation path of the application executable.
    pub executable: Option<PathBuf>,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            code_root: default_code_root(),
            project_root: default_project_root(),
            launch_mode: LaunchMode::default(),
            maya: AppSettings::default(),
            blender: AppSettings::default(),
        }
    }
}

fn default_code_root() -> PathBuf {
    PathBuf::from(DEFAULT_CODE_ROOT)
}

fn default_project_root() -> PathBuf {
    PathBuf::from(DEFAULT_PROJECT_ROOT)
}

impl LauncherConfig {
    pub fn app_settings(&self, app: DccApp) -> &AppSettings {
        match app {
            DccApp::Maya => &self.maya,
            DccApp::Blender => &self.blender,
        }
    }

    /// Executable for `app`, falling back to its standard installation path.
    pub fn executable(&self, app: DccApp) -> PathBuf {
        self.app_settings(app)
            .executable
            .clone()
            .unwrap_or_else(|| PathBuf::from(app.default_executable()))
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.code_root.as_os_str().is_empty() {
            return Err(AppError::config_error("code_root must not be empty"));
        }
        if self.project_root.as_os_str().is_empty() {
            return Err(AppError::config_error("project_root must not be empty"));
        }
        for app in DccApp::ALL {
            if let Some(exe) = &self.app_settings(app).executable
                && exe.as_os_str().is_empty()
            {
                return Err(AppError::config_error(format!("{}.executable must not be empty", app)));
            }
        }
        Ok(())
    }
}

/// Parse and validate launcher configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<LauncherConfig, AppError> {
    let config: LauncherConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
