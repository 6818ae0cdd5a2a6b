use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::domain::AppError;

/// Production state of a data folder under an asset or shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    /// In-progress files.
    #[default]
    Work,
    /// Approved, shared files.
    Publish,
}

impl Stage {
    /// All stages in display order.
    pub const ALL: [Stage; 2] = [Stage::Work, Stage::Publish];

    /// Directory name for this stage.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Stage::Work => "work",
            Stage::Publish => "publish",
        }
    }

    /// Parse a stage from its directory name.
    pub fn from_dir_name(name: &str) -> Option<Stage> {
        match name.to_lowercase().as_str() {
            "work" => Some(Stage::Work),
            "publish" => Some(Stage::Publish),
            _ => None,
        }
    }
}

impl FromStr for Stage {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Stage::from_dir_name(s).ok_or_else(|| AppError::InvalidStage(s.to_string()))
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dir_name())
    }
}
