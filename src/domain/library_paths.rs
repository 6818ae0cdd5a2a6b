//! Folder-naming convention of the code and project libraries.
//!
//! Paths are the root followed by `/` and each component, in convention order.
//! Components are interpolated as-is: a leading `/` stays inside the root and
//! no platform separator is substituted, so the same strings come out on every
//! platform.
//!
//! ```text
//! <code_root>/<repo>/<package>
//! <code_root>/global/<app>
//! <project_root>/<project>/assets/<asset_type>/<asset>/<stage>/<department>/<app>/scenes
//! <project_root>/<project>/shots/<sequence>/<shot>/<stage>/<department>/<app>/scenes
//! ```

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::domain::{DataTarget, DataType, DccApp, Stage};

/// Name of the folder holding scene files under `<department>/<app>/`.
pub const SCENES_DIR: &str = "scenes";

/// Folder under the code root holding application-wide packages.
pub const GLOBAL_DIR: &str = "global";

/// `<base>/<segment>/...` by plain interpolation.
fn interpolate<I, S>(base: &Path, segments: I) -> PathBuf
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut path = base.as_os_str().to_owned();
    for segment in segments {
        path.push("/");
        path.push(segment);
    }
    PathBuf::from(path)
}

/// `<code_root>/<repo>`
pub fn repo_dir(code_root: &Path, repo: &str) -> PathBuf {
    interpolate(code_root, [repo])
}

/// `<code_root>/<repo>/<package>`
pub fn package_dir(code_root: &Path, repo: &str, package: &str) -> PathBuf {
    interpolate(code_root, [repo, package])
}

/// `<code_root>/global/<app>`
pub fn global_app_dir(code_root: &Path, app: DccApp) -> PathBuf {
    interpolate(code_root, [GLOBAL_DIR, app.dir_name()])
}

/// `<project_root>/<project>`
pub fn project_dir(project_root: &Path, project: &str) -> PathBuf {
    interpolate(project_root, [project])
}

/// `<project_root>/<project>/<assets|shots>`
pub fn data_type_dir(project_root: &Path, project: &str, data_type: DataType) -> PathBuf {
    interpolate(project_root, [project, data_type.dir_name()])
}

/// `<project_root>/<project>/assets/<asset_type>`
pub fn asset_type_dir(project_root: &Path, project: &str, asset_type: &str) -> PathBuf {
    interpolate(project_root, [project, DataType::Assets.dir_name(), asset_type])
}

/// `<project_root>/<project>/shots/<sequence>`
pub fn sequence_dir(project_root: &Path, project: &str, sequence: &str) -> PathBuf {
    interpolate(project_root, [project, DataType::Shots.dir_name(), sequence])
}

/// `<project_root>/<project>/<assets|shots>/<group>/<item>`
pub fn target_dir(project_root: &Path, project: &str, target: &DataTarget) -> PathBuf {
    let [group, item] = target.components();
    interpolate(project_root, [project, target.data_type_dir(), group, item])
}

/// `.../<group>/<item>/<stage>`
pub fn stage_dir(
    project_root: &Path,
    project: &str,
    target: &DataTarget,
    stage: Stage,
) -> PathBuf {
    interpolate(&target_dir(project_root, project, target), [stage.dir_name()])
}

/// `.../<stage>/<department>`
pub fn department_dir(
    project_root: &Path,
    project: &str,
    target: &DataTarget,
    stage: Stage,
    department: &str,
) -> PathBuf {
    interpolate(&stage_dir(project_root, project, target, stage), [department])
}

/// `.../<stage>/<department>/<app>/scenes`
pub fn scenes_dir(
    project_root: &Path,
    project: &str,
    target: &DataTarget,
    stage: Stage,
    department: &str,
    app: DccApp,
) -> PathBuf {
    let department = department_dir(project_root, project, target, stage, department);
    interpolate(&department, [app.dir_name(), SCENES_DIR])
}

/// `<scenes_dir>/<file_name>`
pub fn scene_file(scenes_dir: &Path, file_name: &str) -> PathBuf {
    interpolate(scenes_dir, [file_name])
}
