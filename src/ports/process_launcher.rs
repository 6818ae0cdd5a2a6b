use crate::domain::{AppError, LaunchRequest};

/// Port for starting external applications.
pub trait ProcessLauncher {
    /// Start the process described by `request` without waiting for it.
    fn spawn(&self, request: &LaunchRequest) -> Result<(), AppError>;
}
