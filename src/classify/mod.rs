//! Filename classification
//!
//! Turns a file stem into an area token using the configured pattern.

mod extractor;

pub use extractor::{AreaExtractor, Classification, is_folder_name};
