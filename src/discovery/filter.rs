//! Extension filtering
//!
//! Decides which discovered files are eligible for classification.

use std::path::Path;

use crate::constants::WILDCARD;
use crate::utils::split_file_name;

/// Normalises an extension entry from the configuration
///
/// Entries are trimmed, lowercased and given a leading dot. `*` and `.*`
/// both become the wildcard.
pub fn normalize_extension(extension: &str) -> String {
    let extension = extension.trim().to_lowercase();
    if extension == WILDCARD || extension == ".*" {
        return WILDCARD.to_string();
    }
    if extension.starts_with('.') {
        extension
    } else {
        format!(".{extension}")
    }
}

/// Allow-list of file extensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extensions {
    /// Every file is eligible
    Any,
    /// Only these normalised extensions (lowercase, leading dot)
    List(Vec<String>),
}

impl Extensions {
    /// Builds the allow-list from raw configuration entries
    ///
    /// A single wildcard entry anywhere in the list makes it `Any`.
    pub fn from_entries<S: AsRef<str>>(entries: &[S]) -> Self {
        let normalized: Vec<String> = entries
            .iter()
            .map(|entry| normalize_extension(entry.as_ref()))
            .collect();

        if normalized.iter().any(|entry| entry == WILDCARD) {
            Extensions::Any
        } else {
            Extensions::List(normalized)
        }
    }

    /// Checks whether a file passes the allow-list
    ///
    /// The comparison ignores case. Files without an extension only pass
    /// the wildcard.
    pub fn allows(&self, path: &Path) -> bool {
        let entries = match self {
            Extensions::Any => return true,
            Extensions::List(entries) => entries,
        };

        let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
            return false;
        };

        match split_file_name(name) {
            (_, Some(extension)) => {
                let extension = format!(".{}", extension.to_lowercase());
                entries.iter().any(|entry| *entry == extension)
            }
            (_, None) => false,
        }
    }
}

impl Default for Extensions {
    fn default() -> Self {
        Extensions::from_entries(crate::constants::DEFAULT_EXTENSIONS)
    }
}
