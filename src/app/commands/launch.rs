//! Launch an application for a selection.

use std::path::Path;

use tracing::{debug, info};

use crate::app::AppContext;
use crate::domain::environment::EnvVars;
use crate::domain::library_paths;
use crate::domain::{
    AppError, DEFAULT_DEPARTMENT, DataTarget, DccApp, HighlightedNode, LaunchRequest,
    PackageSelection, Selection, Stage, plan_launch,
};
use crate::ports::{EnvironmentReader, LibraryFilesystem, ProcessLauncher};

/// Options for a non-interactive launch.
#[derive(Debug, Clone)]
pub struct LaunchOptions {
    pub app: DccApp,
    pub project: String,
    pub target: DataTarget,
    pub stage: Stage,
    /// Department to launch into; `default` when a scene is named without one.
    pub department: Option<String>,
    /// Scene file name inside the department's scenes folder.
    pub scene: Option<String>,
    pub packages: PackageSelection,
    pub dry_run: bool,
}

/// Result of a launch.
#[derive(Debug, Clone)]
pub struct LaunchOutcome {
    pub request: LaunchRequest,
    /// Whether the process was actually started (false for dry runs).
    pub dispatched: bool,
}

/// Resolve the options into a selection, then launch it.
pub fn execute<F, L, E>(
    ctx: &AppContext<F, L, E>,
    options: LaunchOptions,
) -> Result<LaunchOutcome, AppError>
where
    F: LibraryFilesystem,
    L: ProcessLauncher,
    E: EnvironmentReader,
{
    let highlighted = resolve_highlight(ctx, &options)?;
    let mut selection = Selection::new(options.project, options.target).at_stage(options.stage);
    selection.highlighted = highlighted;

    launch_selection(ctx, options.app, &selection, &options.packages, options.dry_run)
}

/// Launch `app` for an already-resolved selection.
pub fn launch_selection<F, L, E>(
    ctx: &AppContext<F, L, E>,
    app: DccApp,
    selection: &Selection,
    packages: &PackageSelection,
    dry_run: bool,
) -> Result<LaunchOutcome, AppError>
where
    F: LibraryFilesystem,
    L: ProcessLauncher,
    E: EnvironmentReader,
{
    let config = ctx.config();
    let env = launch_environment(app, selection, packages, &config.code_root);
    let request = plan_launch(
        app,
        &config.executable(app),
        selection.highlighted.as_ref(),
        config.launch_mode,
        env,
    );

    if dry_run {
        debug!(command = %request, "dry run, not launching");
        return Ok(LaunchOutcome { request, dispatched: false });
    }

    info!(%app, project = %selection.project, target = %selection.target, "launching");
    ctx.launcher().spawn(&request)?;
    Ok(LaunchOutcome { request, dispatched: true })
}

/// Environment handed to the launched application.
///
/// Package variables come first, then the selection, then the app-specific
/// package directory variable.
pub fn launch_environment(
    app: DccApp,
    selection: &Selection,
    packages: &PackageSelection,
    code_root: &Path,
) -> EnvVars {
    let mut env = packages.env_vars(code_root);
    env.extend(selection.env_vars());
    if let Some((name, dir)) = app.env_dir(code_root) {
        env.insert(name.to_string(), dir.to_string_lossy().into_owned());
    }
    env
}

fn resolve_highlight<F, L, E>(
    ctx: &AppContext<F, L, E>,
    options: &LaunchOptions,
) -> Result<Option<HighlightedNode>, AppError>
where
    F: LibraryFilesystem,
    L: ProcessLauncher,
    E: EnvironmentReader,
{
    let Some(scene) = &options.scene else {
        return Ok(options.department.clone().map(HighlightedNode::Department));
    };

    let department = options.department.as_deref().unwrap_or(DEFAULT_DEPARTMENT);
    let entries = ctx.project_library().scene_entries(
        options.app,
        &options.project,
        &options.target,
        options.stage,
        department,
    )?;

    match entries.into_iter().find(|entry| &entry.label == scene) {
        Some(entry) => {
            Ok(Some(HighlightedNode::Scene { department: department.to_string(), entry }))
        }
        None => {
            let dir = library_paths::scenes_dir(
                &ctx.config().project_root,
                &options.project,
                &options.target,
                options.stage,
                department,
                options.app,
            );
            Err(AppError::SceneNotFound { scene: scene.clone(), dir: dir.display().to_string() })
        }
    }
}
