//! Workflow module
//!
//! This module contains components for orchestrating a classification run.

mod context;
mod engine;

pub use context::{PlannedOperation, RunSummary, WorkflowContext};
pub use engine::{ProcessingOptions, classify_files, process_files, run};
