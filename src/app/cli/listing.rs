//! Printing of library listings.

use tracing::warn;

use crate::app::services::CodeLibraryResolver;
use crate::domain::{AppError, DepartmentNode};
use crate::ports::{EnvironmentReader, LibraryFilesystem};

pub(super) fn print_names(names: Vec<String>, json: bool) -> Result<(), AppError> {
    if json {
        println!("{}", to_json(&names)?);
        return Ok(());
    }
    for name in names {
        println!("{}", name);
    }
    Ok(())
}

pub(super) fn print_tree(tree: &[DepartmentNode], json: bool) -> Result<(), AppError> {
    if json {
        println!("{}", to_json(&tree)?);
        return Ok(());
    }
    for department in tree {
        println!("{}/", department.name);
        for scene in &department.scenes {
            println!("  {}", scene.label);
        }
    }
    Ok(())
}

pub(super) fn print_environment<F, E>(
    code: &CodeLibraryResolver<'_, F, E>,
    json: bool,
) -> Result<(), AppError>
where
    F: LibraryFilesystem,
    E: EnvironmentReader,
{
    let packages = code.environment_packages();
    let paths = code.environment_package_paths();

    if json {
        let value = serde_json::json!({ "packages": packages, "package_paths": paths });
        println!("{}", to_json(&value)?);
        return Ok(());
    }

    match code.environment_package_pairs() {
        Ok(pairs) if pairs.is_empty() => println!("No packages loaded"),
        Ok(pairs) => {
            for (package, path) in pairs {
                println!("{}\t{}", package, path);
            }
        }
        Err(err) => {
            warn!("{}", err);
            println!("PACKAGES: {}", packages.join(";"));
            println!("PACKAGE_PATHS: {}", paths.join(";"));
        }
    }
    Ok(())
}

pub(super) fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String, AppError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| AppError::config_error(format!("Failed to serialize output: {}", e)))
}
