//! File discovery module
//!
//! This module contains components for scanning the base directory and
//! deciding which of the files found are eligible for classification.

mod filter;
mod scanner;

pub use filter::{Extensions, normalize_extension};
pub use scanner::{FileInfo, scan_directory};
