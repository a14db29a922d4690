//! Workflow engine
//!
//! Drives a classification run: scan, filter, classify, resolve, act.

use std::path::{Path, PathBuf};

use colored::Colorize;
use log::{debug, info};

use crate::config::{Action, Config, load_config};
use crate::discovery::scan_directory;
use crate::errors::Result;
use crate::file_ops::{create_destination_dir, perform_file_action};
use crate::logging::format_message;
use crate::path_gen::{DestinationResolver, Placement};

use super::context::{PlannedOperation, RunSummary, WorkflowContext};

/// Options for processing files
#[derive(Debug, Clone)]
pub struct ProcessingOptions {
    /// Path to the configuration file
    pub config_path: PathBuf,
    /// Forces a dry run regardless of the configuration
    pub dry_run: bool,
}

/// Loads the configuration and runs a classification over it
///
/// # Errors
/// Configuration errors abort before any file is touched; filesystem errors
/// abort mid-run, leaving already processed files where they were put.
pub fn process_files(options: ProcessingOptions) -> Result<WorkflowContext> {
    let mut config = load_config(&options.config_path)?;
    config.dry_run |= options.dry_run;
    run(&config)
}

/// Classifies the files of `config.base_dir` and returns the run counters
pub fn classify_files(config: &Config) -> Result<RunSummary> {
    run(config).map(|context| context.summary)
}

/// Runs a classification and returns the full context, including the list
/// of operations performed (or planned, in a dry run)
///
/// Files are handled one at a time in scan order. The first error aborts
/// the run; nothing already moved is rolled back.
pub fn run(config: &Config) -> Result<WorkflowContext> {
    let mut context = WorkflowContext::new(config.dry_run);
    let mut resolver = DestinationResolver::new(&config.base_dir, &config.no_match_dest);

    let files = scan_directory(&config.base_dir, config.recursive)?;
    if files.is_empty() {
        info!("No files found in {}", config.base_dir.display());
        return Ok(context);
    }

    info!(
        "Processing {} files in {}{}...",
        files.len(),
        config.base_dir.display(),
        if config.dry_run { " (dry run)" } else { "" }
    );

    for file in files {
        if !config.allowed_extensions.allows(&file.path) {
            debug!("Skipping {}: extension not allowed", file.filename);
            continue;
        }

        let classification = config.area.classify(&file.stem);
        if !classification.is_match() {
            context.increment_no_match();
        }

        let placement = resolver.resolve(&file.path, &classification)?;

        if placement.is_in_place() {
            debug!("{} is already in {}", file.filename, placement.folder.display());
            context.increment_already_in_place();
        } else {
            log_placement(&config.base_dir, &placement, config, classification.area());
            if !config.dry_run {
                create_destination_dir(&placement.folder)?;
                perform_file_action(&placement, config.action)?;
                context.increment_moved_or_copied();
            }
            context.record_operation(PlannedOperation {
                source: placement.source.clone(),
                destination: placement.target.clone(),
                action: config.action,
                area: classification.area().map(str::to_string),
            });
        }

        context.increment_processed();
    }

    debug!("Finished: {}", context.summary);

    Ok(context)
}

fn log_placement(base_dir: &Path, placement: &Placement, config: &Config, area: Option<&str>) {
    let verb = match (config.dry_run, config.action) {
        (true, action) => format!("Would {action}"),
        (false, Action::Move) => "Moving".to_string(),
        (false, Action::Copy) => "Copying".to_string(),
    };
    let source = relative(base_dir, &placement.source);
    let target = relative(base_dir, &placement.target);

    let message = format!("{verb} {source} -> {target}");
    let colored_target = match area {
        Some(_) => target.as_str().green().bold(),
        None => target.as_str().yellow().bold(),
    };
    let colored_message = format!("{verb} {} -> {}", source.as_str().bold(), colored_target);
    info!("{}", format_message(&message, &colored_message));

    if placement.is_renamed() {
        debug!(
            "Renamed to avoid overwriting an existing file: {}",
            relative(base_dir, &placement.target)
        );
    }
}

fn relative(base_dir: &Path, path: &Path) -> String {
    path.strip_prefix(base_dir)
        .unwrap_or(path)
        .display()
        .to_string()
}
