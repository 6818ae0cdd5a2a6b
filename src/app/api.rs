//! API facade for the application.
//!
//! Glues configuration loading and context creation to the commands.

use std::path::Path;

use crate::adapters::{CommandLauncher, ProcessEnvironment, StdLibraryFilesystem};
use crate::app::commands::{launch, scene_tree};
use crate::app::{AppContext, config};

pub use crate::app::commands::launch::{LaunchOptions, LaunchOutcome};
pub use crate::domain::{AppError, DataTarget, DccApp, DepartmentNode, LauncherConfig, Stage};

/// Context wired to the real filesystem, process spawning and environment.
pub type DefaultContext = AppContext<StdLibraryFilesystem, CommandLauncher, ProcessEnvironment>;

/// Create a context for the given configuration.
pub fn create_context(config: LauncherConfig) -> DefaultContext {
    AppContext::new(config, StdLibraryFilesystem::new(), CommandLauncher::new(), ProcessEnvironment)
}

/// Load configuration from `config_path` (or defaults) and create a context.
pub fn load_context(config_path: Option<&Path>) -> Result<DefaultContext, AppError> {
    let config = config::load_config(config_path)?;
    Ok(create_context(config))
}

/// Department → scene tree of an asset or shot.
pub fn scene_tree(
    ctx: &DefaultContext,
    app: DccApp,
    project: &str,
    target: &DataTarget,
    stage: Stage,
) -> Result<Vec<DepartmentNode>, AppError> {
    scene_tree::build(&ctx.project_library(), app, project, target, stage)
}

/// Launch an application for the given options.
pub fn launch(ctx: &DefaultContext, options: LaunchOptions) -> Result<LaunchOutcome, AppError> {
    launch::execute(ctx, options)
}
