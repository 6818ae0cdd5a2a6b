mod environment_reader;
mod library_filesystem;
mod process_launcher;

pub use environment_reader::EnvironmentReader;
pub use library_filesystem::{LibraryEntry, LibraryFilesystem};
pub use process_launcher::ProcessLauncher;
