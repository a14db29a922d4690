//! File operation functionality
//!
//! Creates destination folders and moves or copies files into them.

use std::fs::{self, create_dir_all};
use std::path::Path;

use filetime::{FileTime, set_file_times};
use fs_extra::file::{CopyOptions, copy, move_file};
use log::debug;

use crate::config::Action;
use crate::errors::{Result, file_operation_error};
use crate::path_gen::Placement;

/// Creates the destination folder and any missing parents
pub fn create_destination_dir(folder: &Path) -> Result<()> {
    create_dir_all(folder)
        .map_err(|e| file_operation_error(e, folder.to_path_buf(), "create directory"))
}

/// Moves or copies a file to its resolved target
///
/// The target must not exist; nothing is ever overwritten. Access and
/// modification times of the source are carried over, and a copy also keeps
/// the permissions. A placement whose target is its source is a no-op.
///
/// # Errors
/// Any filesystem failure, with the operation and path attached
pub fn perform_file_action(placement: &Placement, action: Action) -> Result<()> {
    let source = &placement.source;
    let target = &placement.target;

    if placement.is_in_place() {
        debug!("{} is already in place", source.display());
        return Ok(());
    }

    if target.symlink_metadata().is_ok() {
        return Err(file_operation_error(
            std::io::Error::from(std::io::ErrorKind::AlreadyExists),
            target.clone(),
            action.verb(),
        ));
    }

    let metadata = fs::metadata(source)
        .map_err(|e| file_operation_error(e, source.clone(), "read metadata of"))?;
    let options = CopyOptions::new();

    match action {
        Action::Copy => {
            debug!("Copying file: {} -> {}", source.display(), target.display());
            copy(source, target, &options).map_err(|e| {
                file_operation_error(std::io::Error::other(e), source.clone(), "copy")
            })?;
        }
        Action::Move => {
            debug!("Moving file: {} -> {}", source.display(), target.display());
            move_file(source, target, &options).map_err(|e| {
                file_operation_error(std::io::Error::other(e), source.clone(), "move")
            })?;
        }
    }

    // rename keeps times already; a cross-device move or a copy does not
    let atime = FileTime::from_last_access_time(&metadata);
    let mtime = FileTime::from_last_modification_time(&metadata);
    set_file_times(target, atime, mtime)
        .map_err(|e| file_operation_error(e, target.clone(), "set times on"))?;

    // Last, so a read-only copy can still get its times set
    if action == Action::Copy {
        fs::set_permissions(target, metadata.permissions())
            .map_err(|e| file_operation_error(e, target.clone(), "set permissions on"))?;
    }

    Ok(())
}
