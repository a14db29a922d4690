//! Area extraction
//!
//! Pulls the area code out of a file stem using the configured pattern.

use std::path::{Component, Path};

use log::{debug, trace};
use regex::{Regex, RegexBuilder};

use crate::errors::{Result, invalid_pattern_error, pattern_matching_error};

/// Outcome of classifying a single file stem
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// The pattern matched and captured this area token
    Area(String),
    /// The pattern did not occur in the stem
    NoMatch,
}

impl Classification {
    /// Returns the captured token, if any
    pub fn area(&self) -> Option<&str> {
        match self {
            Classification::Area(token) => Some(token),
            Classification::NoMatch => None,
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, Classification::Area(_))
    }
}

/// Compiled area pattern
///
/// The pattern must contain exactly one capturing group; its content becomes
/// the area token. Matching is unanchored and picks the leftmost occurrence.
#[derive(Debug, Clone)]
pub struct AreaExtractor {
    regex: Regex,
}

impl AreaExtractor {
    /// Compiles `pattern`, rejecting patterns without exactly one capturing group
    ///
    /// # Errors
    /// * `PatternMatching` if the pattern does not compile
    /// * `InvalidPattern` if the number of capturing groups is not one
    pub fn new(pattern: &str, case_insensitive: bool) -> Result<Self> {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(case_insensitive)
            .build()
            .map_err(|e| pattern_matching_error(e, pattern))?;

        // captures_len counts the implicit whole-match group as well
        let groups = regex.captures_len() - 1;
        if groups != 1 {
            return Err(invalid_pattern_error(
                pattern,
                &format!("expected exactly one capturing group, found {groups}"),
            ));
        }

        Ok(AreaExtractor { regex })
    }

    /// The source text of the compiled pattern
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// Returns the captured group of the first match in `stem`
    ///
    /// `None` when the pattern does not occur, or when the group sits in an
    /// alternative branch that did not take part in the match.
    pub fn extract(&self, stem: &str) -> Option<String> {
        let token = self
            .regex
            .captures(stem)
            .and_then(|captures| captures.get(1))
            .map(|group| group.as_str().to_string());
        trace!("Area pattern {} on '{}': {:?}", self.pattern(), stem, token);
        token
    }

    /// Classifies a stem into an area or `NoMatch`
    ///
    /// A token that cannot name a single folder below the base directory
    /// (empty, `.`, `..`) classifies as `NoMatch`.
    pub fn classify(&self, stem: &str) -> Classification {
        match self.extract(stem) {
            Some(token) if is_folder_name(&token) => Classification::Area(token),
            Some(token) => {
                debug!("Ignoring area token '{token}' from '{stem}': not a folder name");
                Classification::NoMatch
            }
            None => Classification::NoMatch,
        }
    }
}

/// True when `name` is exactly one normal path component
pub fn is_folder_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}
