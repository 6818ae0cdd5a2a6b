//! Department → scene tree of one asset or shot.

use tracing::debug;

use crate::app::services::ProjectLibraryResolver;
use crate::domain::{AppError, DataTarget, DccApp, DepartmentNode, Stage};
use crate::ports::LibraryFilesystem;

/// Build the tree shown to the artist: every department at `stage`, with the
/// scenes of `app` found under it. Departments without scenes are kept so the
/// artist can still launch into them.
pub fn build<F: LibraryFilesystem>(
    projects: &ProjectLibraryResolver<'_, F>,
    app: DccApp,
    project: &str,
    target: &DataTarget,
    stage: Stage,
) -> Result<Vec<DepartmentNode>, AppError> {
    let departments = projects.list_departments(project, target, stage)?;
    debug!(%target, %stage, count = departments.len(), "building scene tree");

    departments
        .into_iter()
        .map(|name| {
            let scenes = projects.scene_entries(app, project, target, stage, &name)?;
            Ok(DepartmentNode { name, scenes })
        })
        .collect()
}
