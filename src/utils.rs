use std::fs::create_dir_all;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::constants::{APPLICATION, ORGANIZATION, QUALIFIER};
use crate::errors::{
    Result, file_operation_error, generic_error, invalid_filename_error, path_operation_error,
};

/// Expands `~` and environment variables in a user supplied path
///
/// Unknown variables are left untouched; only the tilde is expanded then.
pub fn expand_path(path: &str) -> String {
    match shellexpand::full(path) {
        Ok(expanded) => expanded.to_string(),
        Err(_) => shellexpand::tilde(path).to_string(),
    }
}

/// Splits a file name at its last dot into stem and extension
///
/// A leading or trailing dot does not delimit an extension, so `.env` and
/// `odd.` have none.
pub fn split_file_name(name: &str) -> (&str, Option<&str>) {
    match name.rfind('.') {
        Some(index) if index > 0 && index + 1 < name.len() => {
            (&name[..index], Some(&name[index + 1..]))
        }
        _ => (name, None),
    }
}

/// Returns the UTF-8 file name of a path
pub(crate) fn file_name_str(path: &Path) -> Result<&str> {
    path.file_name()
        .ok_or_else(|| path_operation_error(path.to_path_buf(), "get filename"))?
        .to_str()
        .ok_or_else(|| invalid_filename_error(path.to_path_buf()))
}

pub(crate) fn find_project_folder() -> Result<ProjectDirs> {
    let folder = ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
        .ok_or_else(|| generic_error("Failed to determine project directories"))?;

    if !folder.config_dir().exists() {
        create_dir_all(folder.config_dir()).map_err(|e| {
            file_operation_error(e, folder.config_dir().to_path_buf(), "create directory")
        })?;
    }
    Ok(folder)
}

/// Places a log file name inside the platform configuration directory
pub(crate) fn config_dir_path(file: &str) -> Result<PathBuf> {
    Ok(find_project_folder()?.config_dir().join(file))
}
