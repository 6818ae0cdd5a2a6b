use std::sync::Mutex;

use crate::domain::{AppError, LaunchRequest};
use crate::ports::ProcessLauncher;

/// Launcher that records requests instead of spawning processes.
#[derive(Default)]
pub struct RecordingLauncher {
    pub launched: Mutex<Vec<LaunchRequest>>,
    pub fail: bool,
}

impl RecordingLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self { launched: Mutex::new(Vec::new()), fail: true }
    }

    pub fn launched(&self) -> Vec<LaunchRequest> {
        self.launched.lock().unwrap().clone()
    }
}

impl ProcessLauncher for RecordingLauncher {
    fn spawn(&self, request: &LaunchRequest) -> Result<(), AppError> {
        if self.fail {
            return Err(AppError::LaunchFailed {
                program: request.program.display().to_string(),
                details: "mock launch failure".into(),
            });
        }
        self.launched.lock().unwrap().push(request.clone());
        Ok(())
    }
}
