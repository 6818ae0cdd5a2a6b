//! Artist selection and the environment it publishes to the launched application.

use crate::domain::environment::{self, EnvVars};
use crate::domain::{DataTarget, HighlightedNode, Stage};

/// Department published when no tree entry is highlighted.
pub const DEFAULT_DEPARTMENT: &str = "default";

/// What the artist picked: project, asset or shot, stage, and tree entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub project: String,
    pub target: DataTarget,
    pub stage: Stage,
    pub highlighted: Option<HighlightedNode>,
}

impl Selection {
    pub fn new(project: impl Into<String>, target: DataTarget) -> Self {
        Self { project: project.into(), target, stage: Stage::default(), highlighted: None }
    }

    pub fn at_stage(mut self, stage: Stage) -> Self {
        self.stage = stage;
        self
    }

    pub fn highlight(mut self, node: HighlightedNode) -> Self {
        self.highlighted = Some(node);
        self
    }

    /// Department of the highlighted node, or `default` when nothing is highlighted.
    pub fn department(&self) -> &str {
        self.highlighted.as_ref().map(HighlightedNode::department).unwrap_or(DEFAULT_DEPARTMENT)
    }

    /// `PROJECT`, then `ASSET_TYPE`/`ASSET` or `SEQUENCE`/`SHOT`, then `DEPARTMENT`.
    pub fn env_vars(&self) -> EnvVars {
        let mut vars = EnvVars::new();
        vars.insert(environment::PROJECT.to_string(), self.project.clone());
        match &self.target {
            DataTarget::Asset { asset_type, asset } => {
                vars.insert(environment::ASSET_TYPE.to_string(), asset_type.clone());
                vars.insert(environment::ASSET.to_string(), asset.clone());
            }
            DataTarget::Shot { sequence, shot } => {
                vars.insert(environment::SEQUENCE.to_string(), sequence.clone());
                vars.insert(environment::SHOT.to_string(), shot.clone());
            }
        }
        vars.insert(environment::DEPARTMENT.to_string(), self.department().to_string());
        vars
    }
}
