//! Directory scanning functionality
//!
//! Enumerates the candidate files below the base directory.

use std::fs::read_dir;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::errors::{Result, file_operation_error};
use crate::utils::{file_name_str, split_file_name};

/// A file found during scanning
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    /// Full path of the file
    pub path: PathBuf,
    /// File name including the extension
    pub filename: String,
    /// File name without the last extension
    pub stem: String,
    /// Last extension without the dot, if any
    pub extension: Option<String>,
}

impl FileInfo {
    /// Creates a new FileInfo from a path
    ///
    /// # Errors
    /// Returns an error if the path has no file name or the name is not UTF-8
    pub fn new(path: PathBuf) -> Result<Self> {
        let filename = file_name_str(&path)?.to_string();
        let (stem, extension) = split_file_name(&filename);
        let stem = stem.to_string();
        let extension = extension.map(str::to_string);

        Ok(FileInfo {
            path,
            filename,
            stem,
            extension,
        })
    }
}

/// Scans a directory for candidate files
///
/// Without `recursive` only the direct children of `directory` are listed;
/// with it, regular files at any depth. Directories are never returned and
/// symbolic links to directories are not followed. The result is sorted by
/// path and fully built before the caller starts moving files around, so
/// files placed into subfolders later are not revisited.
///
/// # Errors
/// Returns an error if a directory cannot be read
pub fn scan_directory(directory: &Path, recursive: bool) -> Result<Vec<FileInfo>> {
    debug!(
        "Scanning directory: {}{}",
        directory.display(),
        if recursive { " (recursive)" } else { "" }
    );

    let mut paths = if recursive {
        walk_recursive(directory)?
    } else {
        list_children(directory)?
    };
    paths.sort();

    let files: Vec<FileInfo> = paths
        .into_iter()
        .filter(|path| path.is_file())
        .filter_map(|path| match FileInfo::new(path) {
            Ok(info) => Some(info),
            Err(e) => {
                warn!("Skipping file: {e}");
                None
            }
        })
        .collect();

    debug!("Found {} files in directory", files.len());

    Ok(files)
}

fn list_children(directory: &Path) -> Result<Vec<PathBuf>> {
    read_dir(directory)
        .map_err(|e| file_operation_error(e, directory.to_path_buf(), "read directory"))?
        .map(|entry| {
            entry
                .map(|e| e.path())
                .map_err(|e| file_operation_error(e, directory.to_path_buf(), "read directory"))
        })
        .collect()
}

fn walk_recursive(directory: &Path) -> Result<Vec<PathBuf>> {
    // Symlinked directories are listed but never descended into
    WalkDir::new(directory)
        .min_depth(1)
        .follow_links(false)
        .into_iter()
        .map(|entry| {
            entry.map(DirEntry::into_path).map_err(|e| {
                let path = e.path().unwrap_or(directory).to_path_buf();
                file_operation_error(io::Error::from(e), path, "access")
            })
        })
        .collect()
}
