//! File operations module
//!
//! Filesystem mutations performed once a file's destination is known.

mod actions;

pub use actions::{create_destination_dir, perform_file_action};
