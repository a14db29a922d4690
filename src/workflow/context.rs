//! Workflow context
//!
//! Per-run state: counters and, for dry runs, the operations that would
//! have been performed.

use std::fmt;
use std::path::PathBuf;

use crate::config::Action;

/// An operation the run performed, or would have performed in a dry run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedOperation {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub action: Action,
    /// Area code the file was classified under; `None` for the fallback folder
    pub area: Option<String>,
}

/// Counters for one run
///
/// Every run starts from zero; nothing is carried over between runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Files that passed the extension filter
    pub processed: usize,
    /// Files actually moved or copied
    pub moved_or_copied: usize,
    /// Files routed to the fallback folder
    pub no_match: usize,
    /// Files left alone because they already sit at their destination
    pub already_in_place: usize,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Processed: {} | Moved/Copied: {} | No match: {}",
            self.processed, self.moved_or_copied, self.no_match
        )
    }
}

/// State threaded through a single run
#[derive(Debug, Clone)]
pub struct WorkflowContext {
    pub dry_run: bool,
    pub summary: RunSummary,
    /// Operations in the order they were decided
    pub operations: Vec<PlannedOperation>,
}

impl WorkflowContext {
    pub fn new(dry_run: bool) -> Self {
        WorkflowContext {
            dry_run,
            summary: RunSummary::default(),
            operations: Vec::new(),
        }
    }

    pub fn record_operation(&mut self, operation: PlannedOperation) {
        self.operations.push(operation);
    }

    pub fn increment_processed(&mut self) {
        self.summary.processed += 1;
    }

    pub fn increment_moved_or_copied(&mut self) {
        self.summary.moved_or_copied += 1;
    }

    pub fn increment_no_match(&mut self) {
        self.summary.no_match += 1;
    }

    pub fn increment_already_in_place(&mut self) {
        self.summary.already_in_place += 1;
    }
}
