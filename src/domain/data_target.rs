use std::fmt;

use serde::Serialize;

/// The asset or shot a selection points at.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DataTarget {
    Asset { asset_type: String, asset: String },
    Shot { sequence: String, shot: String },
}

impl DataTarget {
    pub fn asset(asset_type: impl Into<String>, asset: impl Into<String>) -> Self {
        DataTarget::Asset { asset_type: asset_type.into(), asset: asset.into() }
    }

    pub fn shot(sequence: impl Into<String>, shot: impl Into<String>) -> Self {
        DataTarget::Shot { sequence: sequence.into(), shot: shot.into() }
    }

    /// Data-type folder directly under the project (`assets` or `shots`).
    pub fn data_type_dir(&self) -> &'static str {
        match self {
            DataTarget::Asset { .. } => DataType::Assets.dir_name(),
            DataTarget::Shot { .. } => DataType::Shots.dir_name(),
        }
    }

    /// The two folder names between the data-type folder and the stage folder.
    pub fn components(&self) -> [&str; 2] {
        match self {
            DataTarget::Asset { asset_type, asset } => [asset_type, asset],
            DataTarget::Shot { sequence, shot } => [sequence, shot],
        }
    }
}

impl fmt::Display for DataTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [group, item] = self.components();
        write!(f, "{}/{}/{}", self.data_type_dir(), group, item)
    }
}

/// Top-level data categories of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    Assets,
    Shots,
}

impl DataType {
    pub const ALL: [DataType; 2] = [DataType::Assets, DataType::Shots];

    pub fn dir_name(&self) -> &'static str {
        match self {
            DataType::Assets => "assets",
            DataType::Shots => "shots",
        }
    }
}
