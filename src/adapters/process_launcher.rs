use std::process::{Command, Stdio};

use tracing::{debug, info};

use crate::domain::{AppError, LaunchRequest};
use crate::ports::ProcessLauncher;

/// Starts applications with `std::process::Command`.
///
/// The child inherits the launcher's environment plus the request overrides;
/// the launcher's own environment is never modified. Children are detached
/// from the launcher's stdio and never waited on.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandLauncher;

impl CommandLauncher {
    pub fn new() -> Self {
        Self
    }

    fn command(request: &LaunchRequest) -> Command {
        let mut command = Command::new(&request.program);
        command
            .args(&request.args)
            .envs(&request.env)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        command
    }
}

impl ProcessLauncher for CommandLauncher {
    fn spawn(&self, request: &LaunchRequest) -> Result<(), AppError> {
        for (key, value) in &request.env {
            debug!(%key, %value, "child environment");
        }

        let child = Self::command(request).spawn().map_err(|e| AppError::LaunchFailed {
            program: request.program.display().to_string(),
            details: e.to_string(),
        })?;

        info!(pid = child.id(), command = %request, "launched application");
        Ok(())
    }
}
