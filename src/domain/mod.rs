pub mod dcc_app;
pub mod data_target;
pub mod environment;
pub mod error;
pub mod launch_request;
pub mod launcher_config;
pub mod library_paths;
pub mod package_selection;
pub mod scene_tree;
pub mod selection;
pub mod stage;

pub use data_target::{DataTarget, DataType};
pub use dcc_app::DccApp;
pub use environment::EnvVars;
pub use error::AppError;
pub use launch_request::{LaunchMode, LaunchRequest, plan_launch};
pub use launcher_config::{AppSettings, LauncherConfig};
pub use package_selection::{DEFAULT_REPO, PackageSelection, PackageSpec};
pub use scene_tree::{DepartmentNode, HighlightedNode, SceneEntry};
pub use selection::{DEFAULT_DEPARTMENT, Selection};
pub use stage::Stage;
