//! The launch decision: which program runs, with which argument and environment.

use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::environment::EnvVars;
use crate::domain::{DccApp, HighlightedNode};

/// How the application is started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LaunchMode {
    /// Spawn the application executable, passing the scene as its argument.
    #[default]
    Direct,
    /// Hand the scene (or the executable) to the platform opener.
    SystemOpen,
}

/// A fully-resolved process launch.
///
/// `env` is applied to the child process only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchRequest {
    pub program: PathBuf,
    pub args: Vec<OsString>,
    pub env: EnvVars,
}

impl fmt::Display for LaunchRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

/// Scene path to open for the highlighted entry, if it is a scene of `app`.
pub fn scene_to_open(app: DccApp, highlighted: Option<&HighlightedNode>) -> Option<&Path> {
    let node = highlighted?;
    if !app.is_scene_file(node.label()) {
        return None;
    }
    node.path().map(PathBuf::as_path)
}

/// Decide the launch for the current selection.
///
/// A highlighted entry whose label ends with the app's scene extension is opened
/// through its stored path; anything else starts the bare executable.
pub fn plan_launch(
    app: DccApp,
    executable: &Path,
    highlighted: Option<&HighlightedNode>,
    mode: LaunchMode,
    env: EnvVars,
) -> LaunchRequest {
    let scene = scene_to_open(app, highlighted);
    match mode {
        LaunchMode::Direct => LaunchRequest {
            program: executable.to_path_buf(),
            args: scene.map(|path| vec![path.as_os_str().to_owned()]).unwrap_or_default(),
            env,
        },
        LaunchMode::SystemOpen => {
            let target = scene.unwrap_or(executable);
            let (program, mut args) = system_opener();
            args.push(target.as_os_str().to_owned());
            LaunchRequest { program, args, env }
        }
    }
}

/// Platform default-open command and its leading arguments.
fn system_opener() -> (PathBuf, Vec<OsString>) {
    if cfg!(target_os = "windows") {
        (PathBuf::from("cmd"), vec!["/C".into(), "start".into(), "".into()])
    } else if cfg!(target_os = "macos") {
        (PathBuf::from("open"), Vec::new())
    } else {
        (PathBuf::from("xdg-open"), Vec::new())
    }
}
