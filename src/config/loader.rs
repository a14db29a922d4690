//! Configuration loading functionality
//!
//! Reads the configuration file, parses it as JSON or YAML and validates it.

use std::fs;
use std::path::Path;

use log::debug;

use crate::errors::{Result, config_parsing_error, file_operation_error};

use super::model::{Config, RawConfig};

/// Serialisation format of a configuration file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
}

impl ConfigFormat {
    /// Picks the format from the file extension; anything but `.yaml`/`.yml` is JSON
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .as_deref()
        {
            Some("yaml") | Some("yml") => ConfigFormat::Yaml,
            _ => ConfigFormat::Json,
        }
    }
}

/// Parses configuration text without validating it
///
/// # Errors
/// Returns a parsing error for malformed input or a missing `base_dir`
pub fn parse_config(content: &str, format: ConfigFormat) -> Result<RawConfig> {
    match format {
        ConfigFormat::Json => serde_json::from_str(content).map_err(|e| {
            let detail = format!("{e}. Please check the JSON syntax.");
            config_parsing_error(e, &detail)
        }),
        ConfigFormat::Yaml => serde_yaml::from_str(content).map_err(|e| {
            let detail = format!("{e}. Please check the YAML syntax.");
            config_parsing_error(e, &detail)
        }),
    }
}

fn read_config(file: &Path) -> Result<RawConfig> {
    let bytes = fs::read(file)
        .map_err(|e| file_operation_error(e, file.to_path_buf(), "read configuration"))?;

    let content = String::from_utf8(bytes).map_err(|e| {
        let detail = format!(
            "Configuration file {} contains invalid UTF-8 characters",
            file.display()
        );
        config_parsing_error(e, &detail)
    })?;

    let format = ConfigFormat::from_path(file);
    debug!("Parsing {} as {:?}", file.display(), format);
    parse_config(&content, format)
}

/// Loads and validates a configuration file
///
/// The base directory must exist and be a directory.
///
/// # Errors
/// Returns an error if the file cannot be read, does not parse, or holds an
/// invalid value
pub fn load_config(file: &Path) -> Result<Config> {
    let config = read_config(file)?.validate(true)?;
    debug!(
        "Loaded configuration from {}: base_dir={}, action={}, dry_run={}, recursive={}",
        file.display(),
        config.base_dir.display(),
        config.action,
        config.dry_run,
        config.recursive
    );
    Ok(config)
}

/// Loads a configuration file without checking that the base directory exists
///
/// This is primarily used for testing.
pub fn load_config_for_testing(file: &Path) -> Result<Config> {
    read_config(file)?.validate(false)
}
