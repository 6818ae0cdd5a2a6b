pub mod code_library_resolver;
pub(crate) mod folder_listing;
pub mod project_library_resolver;

pub use code_library_resolver::CodeLibraryResolver;
pub use project_library_resolver::ProjectLibraryResolver;
