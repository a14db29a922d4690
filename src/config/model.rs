//! Configuration data structures
//!
//! `RawConfig` mirrors the configuration file; `Config` is the validated,
//! normalised value the rest of the crate works with.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;

use crate::classify::{AreaExtractor, is_folder_name};
use crate::constants::{DEFAULT_AREA_REGEX, DEFAULT_EXTENSIONS, DEFAULT_NO_MATCH_DEST};
use crate::discovery::Extensions;
use crate::errors::{
    Error, Result, directory_not_found_error, file_operation_error, invalid_config_error,
    not_a_directory_error,
};
use crate::utils::expand_path;

/// What happens to a classified file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Action {
    /// Relocate the file, removing it from its source location
    #[default]
    Move,
    /// Duplicate the file, leaving the source untouched
    Copy,
}

impl Action {
    /// Lowercase verb, as written in the configuration file
    pub fn verb(self) -> &'static str {
        match self {
            Action::Move => "move",
            Action::Copy => "copy",
        }
    }
}

impl FromStr for Action {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "move" => Ok(Action::Move),
            "copy" => Ok(Action::Copy),
            other => Err(invalid_config_error(&format!(
                "unknown action '{other}', expected \"move\" or \"copy\""
            ))),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.verb())
    }
}

/// The configuration file as written by the user
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct RawConfig {
    /// Directory whose files are classified; `~` and `$VARS` are expanded
    pub base_dir: String,
    #[serde(default = "default_action")]
    pub action: String,
    #[serde(default)]
    pub dry_run: bool,
    #[serde(default)]
    pub recursive: bool,
    #[serde(default = "default_extensions")]
    pub allowed_extensions: Vec<String>,
    /// Regular expression with exactly one capturing group
    #[serde(default = "default_area_regex")]
    pub area_regex: String,
    #[serde(default)]
    pub case_insensitive: bool,
    #[serde(default = "default_no_match_dest")]
    pub no_match_dest: String,
}

fn default_action() -> String {
    Action::default().verb().to_string()
}

fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect()
}

fn default_area_regex() -> String {
    DEFAULT_AREA_REGEX.to_string()
}

fn default_no_match_dest() -> String {
    DEFAULT_NO_MATCH_DEST.to_string()
}

impl RawConfig {
    /// Normalises and validates the raw values
    ///
    /// With `check_paths` the base directory must exist and is canonicalised;
    /// without it the path is only made absolute.
    ///
    /// # Errors
    /// Returns a configuration error for the first unusable value
    pub fn validate(self, check_paths: bool) -> Result<Config> {
        if self.base_dir.trim().is_empty() {
            return Err(invalid_config_error("base_dir must not be empty"));
        }
        let base_dir = resolve_base_dir(Path::new(&expand_path(&self.base_dir)), check_paths)?;

        Ok(Config {
            base_dir,
            action: self.action.parse()?,
            dry_run: self.dry_run,
            recursive: self.recursive,
            allowed_extensions: Extensions::from_entries(&self.allowed_extensions),
            area: AreaExtractor::new(&self.area_regex, self.case_insensitive)?,
            no_match_dest: check_no_match_dest(&self.no_match_dest)?,
        })
    }
}

/// Validated configuration for one run
#[derive(Debug, Clone)]
pub struct Config {
    /// Absolute path of the directory being organised
    pub base_dir: PathBuf,
    pub action: Action,
    pub dry_run: bool,
    pub recursive: bool,
    pub allowed_extensions: Extensions,
    /// Compiled area pattern
    pub area: AreaExtractor,
    /// Folder name for files without an area code
    pub no_match_dest: String,
}

impl Config {
    /// Starts a configuration for `base_dir` with every other value defaulted
    pub fn builder(base_dir: impl Into<PathBuf>) -> ConfigBuilder {
        ConfigBuilder::new(base_dir)
    }
}

/// Builder for `Config` values created in code rather than loaded from a file
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    base_dir: PathBuf,
    action: Action,
    dry_run: bool,
    recursive: bool,
    allowed_extensions: Vec<String>,
    area_regex: String,
    case_insensitive: bool,
    no_match_dest: String,
}

impl ConfigBuilder {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        ConfigBuilder {
            base_dir: base_dir.into(),
            action: Action::default(),
            dry_run: false,
            recursive: false,
            allowed_extensions: default_extensions(),
            area_regex: default_area_regex(),
            case_insensitive: false,
            no_match_dest: default_no_match_dest(),
        }
    }

    pub fn action(mut self, action: Action) -> Self {
        self.action = action;
        self
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    pub fn allowed_extensions<S: AsRef<str>>(mut self, extensions: &[S]) -> Self {
        self.allowed_extensions = extensions.iter().map(|e| e.as_ref().to_string()).collect();
        self
    }

    pub fn area_regex(mut self, pattern: &str) -> Self {
        self.area_regex = pattern.to_string();
        self
    }

    pub fn case_insensitive(mut self, case_insensitive: bool) -> Self {
        self.case_insensitive = case_insensitive;
        self
    }

    pub fn no_match_dest(mut self, folder: &str) -> Self {
        self.no_match_dest = folder.to_string();
        self
    }

    /// Validates the values, requiring the base directory to exist
    pub fn build(self) -> Result<Config> {
        Ok(Config {
            base_dir: resolve_base_dir(&self.base_dir, true)?,
            action: self.action,
            dry_run: self.dry_run,
            recursive: self.recursive,
            allowed_extensions: Extensions::from_entries(&self.allowed_extensions),
            area: AreaExtractor::new(&self.area_regex, self.case_insensitive)?,
            no_match_dest: check_no_match_dest(&self.no_match_dest)?,
        })
    }
}

fn resolve_base_dir(path: &Path, check_paths: bool) -> Result<PathBuf> {
    if !check_paths {
        return std::path::absolute(path)
            .map_err(|e| file_operation_error(e, path.to_path_buf(), "resolve"));
    }

    if !path.exists() {
        return Err(directory_not_found_error(path.to_path_buf()));
    }
    if !path.is_dir() {
        return Err(not_a_directory_error(path.to_path_buf()));
    }

    path.canonicalize()
        .map_err(|e| file_operation_error(e, path.to_path_buf(), "resolve"))
}

fn check_no_match_dest(folder: &str) -> Result<String> {
    let folder = folder.trim();
    if !is_folder_name(folder) {
        return Err(invalid_config_error(&format!(
            "no_match_dest '{folder}' must be a single folder name"
        )));
    }
    Ok(folder.to_string())
}
