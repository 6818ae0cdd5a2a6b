use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Serialize;

use crate::domain::{AppError, library_paths};

/// Digital-content-creation applications the launcher can start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DccApp {
    /// 3D animation and modeling package.
    Maya,
    /// Scene-composition package.
    Blender,
}

impl DccApp {
    pub const ALL: [DccApp; 2] = [DccApp::Maya, DccApp::Blender];

    /// Folder name under `<department>/` holding this application's data.
    pub fn dir_name(&self) -> &'static str {
        match self {
            DccApp::Maya => "maya",
            DccApp::Blender => "blender",
        }
    }

    /// Scene file extension, including the leading dot.
    pub fn scene_extension(&self) -> &'static str {
        match self {
            DccApp::Maya => ".ma",
            DccApp::Blender => ".blend",
        }
    }

    /// Whether a file name is a scene for this application.
    pub fn is_scene_file(&self, name: &str) -> bool {
        name.ends_with(self.scene_extension())
    }

    /// Installation path used when no executable is configured.
    pub fn default_executable(&self) -> &'static str {
        match self {
            DccApp::Maya => "C:/Program Files/Autodesk/Maya2020/bin/maya.exe",
            DccApp::Blender => {
                "C:/Program Files/Blender Foundation/Blender 3.1/blender-launcher.exe"
            }
        }
    }

    /// Application-specific variable pointing at its package directory root,
    /// resolved against the code library.
    pub fn env_dir(&self, code_root: &Path) -> Option<(&'static str, PathBuf)> {
        match self {
            DccApp::Maya => {
                Some(("MAYA_ENV_DIR", library_paths::global_app_dir(code_root, *self)))
            }
            DccApp::Blender => None,
        }
    }

    pub fn from_name(name: &str) -> Option<DccApp> {
        match name.to_lowercase().as_str() {
            "maya" => Some(DccApp::Maya),
            "blender" => Some(DccApp::Blender),
            _ => None,
        }
    }
}

impl FromStr for DccApp {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DccApp::from_name(s).ok_or_else(|| AppError::InvalidApplication(s.to_string()))
    }
}

impl fmt::Display for DccApp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dir_name())
    }
}
