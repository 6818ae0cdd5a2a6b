//! pipelaunch: resolve pipeline project/asset/shot folders and launch DCC applications.
//!
//! The library exposes the folder-naming convention of the code and project
//! libraries, the environment published to launched applications, and the
//! launch decision. The CLI in [`app::cli`] is one front-end over it.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;


pub use app::AppContext;
pub use app::api::{
    DefaultContext, LaunchOptions, LaunchOutcome, create_context, launch, load_context, scene_tree,
};
pub use app::services::{CodeLibraryResolver, ProjectLibraryResolver};
pub use domain::{
    AppError, DataTarget, DccApp, DepartmentNode, EnvVars, HighlightedNode, LaunchMode,
    LaunchRequest, LauncherConfig, PackageSelection, PackageSpec, SceneEntry, Selection, Stage,
};
