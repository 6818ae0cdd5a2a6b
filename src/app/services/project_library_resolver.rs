//! Project-library lookups following the assets/shots folder convention.

use std::path::Path;

use crate::app::services::folder_listing::{list_folders, list_names};
use crate::domain::{AppError, DataTarget, DataType, DccApp, SceneEntry, Stage, library_paths};
use crate::ports::LibraryFilesystem;

/// Resolves folders and scene files under the project root.
///
/// Every lookup returns a sorted list and degrades to an empty list when the
/// folder it reads does not exist.
pub struct ProjectLibraryResolver<'a, F: LibraryFilesystem> {
    library: &'a F,
    root: &'a Path,
}

impl<'a, F: LibraryFilesystem> ProjectLibraryResolver<'a, F> {
    pub fn new(library: &'a F, root: &'a Path) -> Self {
        Self { library, root }
    }

    /// The project library folder.
    pub fn project_root(&self) -> &Path {
        self.root
    }

    pub fn list_projects(&self) -> Result<Vec<String>, AppError> {
        list_folders(self.library, self.root)
    }

    pub fn list_asset_types(&self, project: &str) -> Result<Vec<String>, AppError> {
        let dir = library_paths::data_type_dir(self.root, project, DataType::Assets);
        list_folders(self.library, &dir)
    }

    pub fn list_assets(&self, project: &str, asset_type: &str) -> Result<Vec<String>, AppError> {
        list_folders(self.library, &library_paths::asset_type_dir(self.root, project, asset_type))
    }

    pub fn list_sequences(&self, project: &str) -> Result<Vec<String>, AppError> {
        let dir = library_paths::data_type_dir(self.root, project, DataType::Shots);
        list_folders(self.library, &dir)
    }

    pub fn list_shots(&self, project: &str, sequence: &str) -> Result<Vec<String>, AppError> {
        list_folders(self.library, &library_paths::sequence_dir(self.root, project, sequence))
    }

    /// Department folders of an asset or shot at `stage`.
    pub fn list_departments(
        &self,
        project: &str,
        target: &DataTarget,
        stage: Stage,
    ) -> Result<Vec<String>, AppError> {
        list_folders(self.library, &library_paths::stage_dir(self.root, project, target, stage))
    }

    pub fn list_asset_departments(
        &self,
        project: &str,
        asset_type: &str,
        asset: &str,
        stage: Stage,
    ) -> Result<Vec<String>, AppError> {
        self.list_departments(project, &DataTarget::asset(asset_type, asset), stage)
    }

    pub fn list_shot_departments(
        &self,
        project: &str,
        sequence: &str,
        shot: &str,
        stage: Stage,
    ) -> Result<Vec<String>, AppError> {
        self.list_departments(project, &DataTarget::shot(sequence, shot), stage)
    }

    /// Scene file names of `app` in `<department>/<app>/scenes`.
    ///
    /// Only regular files ending in the app's extension are returned.
    pub fn list_scenes(
        &self,
        app: DccApp,
        project: &str,
        target: &DataTarget,
        stage: Stage,
        department: &str,
    ) -> Result<Vec<String>, AppError> {
        let dir = library_paths::scenes_dir(self.root, project, target, stage, department, app);
        list_names(self.library, &dir, |entry| !entry.is_dir && app.is_scene_file(&entry.name))
    }

    pub fn list_asset_scenes(
        &self,
        app: DccApp,
        project: &str,
        asset_type: &str,
        asset: &str,
        stage: Stage,
        department: &str,
    ) -> Result<Vec<String>, AppError> {
        self.list_scenes(app, project, &DataTarget::asset(asset_type, asset), stage, department)
    }

    pub fn list_shot_scenes(
        &self,
        app: DccApp,
        project: &str,
        sequence: &str,
        shot: &str,
        stage: Stage,
        department: &str,
    ) -> Result<Vec<String>, AppError> {
        self.list_scenes(app, project, &DataTarget::shot(sequence, shot), stage, department)
    }

    /// Scenes of a department with their full paths.
    pub fn scene_entries(
        &self,
        app: DccApp,
        project: &str,
        target: &DataTarget,
        stage: Stage,
        department: &str,
    ) -> Result<Vec<SceneEntry>, AppError> {
        let dir = library_paths::scenes_dir(self.root, project, target, stage, department, app);
        let names = self.list_scenes(app, project, target, stage, department)?;
        Ok(names
            .into_iter()
            .map(|label| SceneEntry { path: library_paths::scene_file(&dir, &label), label })
            .collect())
    }
}
