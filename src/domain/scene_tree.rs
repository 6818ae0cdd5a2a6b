use std::path::PathBuf;

use serde::Serialize;

/// A scene file discovered under `<department>/<app>/scenes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SceneEntry {
    /// File name as shown to the artist.
    pub label: String,
    /// Full path handed to the application.
    pub path: PathBuf,
}

/// One department of an asset or shot with its scenes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartmentNode {
    pub name: String,
    pub scenes: Vec<SceneEntry>,
}

/// The currently highlighted entry of the scene tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HighlightedNode {
    Department(String),
    Scene { department: String, entry: SceneEntry },
}

impl HighlightedNode {
    pub fn department(&self) -> &str {
        match self {
            HighlightedNode::Department(name) => name,
            HighlightedNode::Scene { department, .. } => department,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            HighlightedNode::Department(name) => name,
            HighlightedNode::Scene { entry, .. } => &entry.label,
        }
    }

    /// Stored full path of the entry, if it carries one.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            HighlightedNode::Department(_) => None,
            HighlightedNode::Scene { entry, .. } => Some(&entry.path),
        }
    }
}
