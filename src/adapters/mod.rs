pub mod library_filesystem;
pub mod process_environment;
pub mod process_launcher;

pub use library_filesystem::StdLibraryFilesystem;
pub use process_environment::ProcessEnvironment;
pub use process_launcher::CommandLauncher;
