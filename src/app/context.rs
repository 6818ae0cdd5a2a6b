use crate::app::services::{CodeLibraryResolver, ProjectLibraryResolver};
use crate::domain::LauncherConfig;
use crate::ports::{EnvironmentReader, LibraryFilesystem, ProcessLauncher};

/// Application context holding configuration and dependencies for command execution.
pub struct AppContext<F: LibraryFilesystem, L: ProcessLauncher, E: EnvironmentReader> {
    config: LauncherConfig,
    library: F,
    launcher: L,
    environment: E,
}

impl<F: LibraryFilesystem, L: ProcessLauncher, E: EnvironmentReader> AppContext<F, L, E> {
    /// Create a new application context.
    pub fn new(config: LauncherConfig, library: F, launcher: L, environment: E) -> Self {
        Self { config, library, launcher, environment }
    }

    pub fn config(&self) -> &LauncherConfig {
        &self.config
    }

    /// Get a reference to the library filesystem.
    pub fn library(&self) -> &F {
        &self.library
    }

    /// Get a reference to the process launcher.
    pub fn launcher(&self) -> &L {
        &self.launcher
    }

    /// Code-library resolver rooted at the configured code root.
    pub fn code_library(&self) -> CodeLibraryResolver<'_, F, E> {
        CodeLibraryResolver::new(&self.library, &self.environment, &self.config.code_root)
    }

    /// Project-library resolver rooted at the configured project root.
    pub fn project_library(&self) -> ProjectLibraryResolver<'_, F> {
        ProjectLibraryResolver::new(&self.library, &self.config.project_root)
    }
}
