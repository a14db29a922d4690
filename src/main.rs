use std::process::ExitCode;

use anyhow::{Context, Result};
use human_panic::setup_panic;
use log::{LevelFilter, error};

use area_sort::cli::{get_log_file, get_matches, get_processing_options, get_verbosity};
use area_sort::logging::init_logger;
use area_sort::workflow::process_files;

fn main() -> ExitCode {
    setup_panic!();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // The logger writes to stderr once installed
            if log::max_level() == LevelFilter::Off {
                eprintln!("Error: {e:#}");
            } else {
                error!("Error: {e:#}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let matches = get_matches();

    let log_file = get_log_file(&matches)?;
    init_logger(get_verbosity(&matches), log_file.as_deref())?;

    let options = get_processing_options(&matches)?;
    let config_path = options.config_path.clone();

    let context = process_files(options)
        .with_context(|| format!("Run with configuration {} failed", config_path.display()))?;

    println!("{}", context.summary);
    Ok(())
}
