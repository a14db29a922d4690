//! Destination resolution
//!
//! Computes the folder a classified file belongs in and a name inside that
//! folder that does not overwrite anything.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use log::{debug, trace};

use crate::classify::Classification;
use crate::constants::MAX_DISAMBIGUATION_ATTEMPTS;
use crate::errors::{Result, disambiguation_exhausted_error};
use crate::utils::{file_name_str, split_file_name};

/// Where a single file should end up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    /// The file being placed
    pub source: PathBuf,
    /// Folder named after the area, or the fallback folder
    pub folder: PathBuf,
    /// Final path inside `folder`
    pub target: PathBuf,
}

impl Placement {
    /// True when the file already sits at its destination
    pub fn is_in_place(&self) -> bool {
        self.source == self.target
    }

    /// True when the target name differs from the source name
    pub fn is_renamed(&self) -> bool {
        self.source.file_name() != self.target.file_name()
    }
}

/// Resolves placements for one run
///
/// Resolution never touches the filesystem beyond existence checks; the
/// folder is created by the action step. Every target handed out is
/// remembered, so two files with the same name in one run never share a
/// target even when nothing has been written yet (dry runs).
#[derive(Debug)]
pub struct DestinationResolver {
    base_dir: PathBuf,
    no_match_dest: String,
    claimed: HashSet<PathBuf>,
    max_attempts: u32,
}

impl DestinationResolver {
    pub fn new(base_dir: &Path, no_match_dest: &str) -> Self {
        DestinationResolver {
            base_dir: base_dir.to_path_buf(),
            no_match_dest: no_match_dest.to_string(),
            claimed: HashSet::new(),
            max_attempts: MAX_DISAMBIGUATION_ATTEMPTS,
        }
    }

    /// Overrides how many " (n)" suffixes are tried before giving up
    pub fn max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts;
        self
    }

    /// Destination folder for a classification
    pub fn folder_for(&self, classification: &Classification) -> PathBuf {
        match classification {
            Classification::Area(token) => self.base_dir.join(token),
            Classification::NoMatch => self.base_dir.join(&self.no_match_dest),
        }
    }

    /// Resolves the placement of `source`
    ///
    /// # Errors
    /// * The source has no UTF-8 file name
    /// * No free name was found within `MAX_DISAMBIGUATION_ATTEMPTS`
    pub fn resolve(&mut self, source: &Path, classification: &Classification) -> Result<Placement> {
        let folder = self.folder_for(classification);
        let name = file_name_str(source)?;
        let target = self.unique_target(&folder, name, source)?;

        trace!("Resolved {} -> {}", source.display(), target.display());
        self.claimed.insert(target.clone());

        Ok(Placement {
            source: source.to_path_buf(),
            folder,
            target,
        })
    }

    fn unique_target(&self, folder: &Path, name: &str, source: &Path) -> Result<PathBuf> {
        let candidate = folder.join(name);
        if !self.is_occupied(&candidate, source) {
            return Ok(candidate);
        }

        let (stem, extension) = split_file_name(name);
        for n in 1..=self.max_attempts {
            let candidate = folder.join(numbered_name(stem, extension, n));
            if !self.is_occupied(&candidate, source) {
                debug!("'{}' is taken in {}, using {}", name, folder.display(), candidate.display());
                return Ok(candidate);
            }
        }

        Err(disambiguation_exhausted_error(
            folder.to_path_buf(),
            name,
            self.max_attempts,
        ))
    }

    /// The source's own path never counts as occupied
    fn is_occupied(&self, candidate: &Path, source: &Path) -> bool {
        if candidate == source {
            return false;
        }
        self.claimed.contains(candidate) || candidate.symlink_metadata().is_ok()
    }
}

/// Builds `stem (n).ext`, or `stem (n)` without extension
pub fn numbered_name(stem: &str, extension: Option<&str>, n: u32) -> String {
    match extension {
        Some(extension) => format!("{stem} ({n}).{extension}"),
        None => format!("{stem} ({n})"),
    }
}
