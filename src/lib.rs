//! Sorts files into folders named after an area code found in their names.
//!
//! A run scans a base directory, keeps the files whose extension is allowed,
//! extracts an area code from each file stem with a configurable regular
//! expression and moves (or copies) the file into `base_dir/<area>`. Files
//! without a code go to a fallback folder. Existing files are never
//! overwritten; clashing names get a ` (n)` suffix.
//!
//! ```no_run
//! use area_sort::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let config = Config::builder("/srv/scans").action(Action::Copy).build()?;
//! let summary = classify_files(&config)?;
//! println!("{summary}");
//! # Ok(())
//! # }
//! ```

pub mod classify;
pub mod cli;
pub mod config;
pub mod constants;
pub mod discovery;
pub mod errors;
pub mod file_ops;
pub mod logging;
pub mod path_gen;
pub mod utils;
pub mod workflow;

pub mod prelude {
    pub use crate::classify::{AreaExtractor, Classification};
    pub use crate::config::{Action, Config, load_config};
    pub use crate::discovery::Extensions;
    pub use crate::errors::{
        Error, Result, config_parsing_error, directory_not_found_error,
        disambiguation_exhausted_error, file_operation_error, generic_error,
        invalid_config_error, invalid_filename_error, invalid_pattern_error,
        path_operation_error, pattern_matching_error,
    };
    pub use crate::logging::{LogLevel, format_message, init_logger};
    pub use crate::path_gen::{DestinationResolver, Placement};
    pub use crate::workflow::{
        ProcessingOptions, RunSummary, WorkflowContext, classify_files, process_files,
    };
}
