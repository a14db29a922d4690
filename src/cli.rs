use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Arg, ArgMatches, Command, command, crate_authors, crate_description, crate_version};

use crate::constants::{
    CONFIG_HELP, DRY_RUN_HELP, LOCAL_LOGGING_HELP, LOG_FILE_DEFAULT, LOG_FILE_HELP, VERBOSE_HELP,
};
use crate::errors::{Result, generic_error};
use crate::logging::LogLevel;
use crate::utils::config_dir_path;
use crate::workflow::ProcessingOptions;

/// Builds the command-line interface
///
/// Defines the following arguments:
/// - `config`: path to the configuration file (required)
/// - `dry`: report without touching any file
/// - `verbose`: increase verbosity level
/// - `log_file` / `log_locally`: optional log file and where it lives
pub fn build_command() -> Command {
    let arg_config = Arg::new("config")
        .short('c')
        .long("config")
        .value_name("FILE")
        .help(CONFIG_HELP)
        .required(true)
        .value_parser(clap::value_parser!(PathBuf));

    let arg_dry = Arg::new("dry")
        .short('n')
        .long("dry")
        .help(DRY_RUN_HELP)
        .action(clap::ArgAction::SetTrue);

    let arg_verbose = Arg::new("verbose")
        .short('v')
        .long("verbose")
        .help(VERBOSE_HELP)
        .action(clap::ArgAction::Count);

    let log_file = Arg::new("log_file")
        .short('l')
        .long("log-file")
        .value_name("FILE")
        .help(LOG_FILE_HELP)
        .default_value(LOG_FILE_DEFAULT);

    let log_locally = Arg::new("log_locally")
        .short('L')
        .long("log-locally")
        .help(LOCAL_LOGGING_HELP)
        .action(clap::ArgAction::SetTrue);

    command!()
        .author(crate_authors!())
        .about(crate_description!())
        .version(crate_version!())
        .arg(arg_config)
        .arg(arg_dry)
        .arg(log_file)
        .arg(log_locally)
        .arg(arg_verbose)
}

/// Parses the process arguments, exiting with usage information on error
pub fn get_matches() -> ArgMatches {
    build_command().get_matches()
}

/// Parses an explicit argument list
pub fn try_get_matches_from<I, T>(args: I) -> Result<ArgMatches>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    build_command()
        .try_get_matches_from(args)
        .map_err(|e| generic_error(&e.to_string()))
}

/// Turns parsed arguments into processing options
pub fn get_processing_options(matches: &ArgMatches) -> Result<ProcessingOptions> {
    let config_path = matches
        .get_one::<PathBuf>("config")
        .cloned()
        .ok_or_else(|| generic_error("Configuration file option not found"))?;

    Ok(ProcessingOptions {
        config_path,
        dry_run: matches.get_flag("dry"),
    })
}

/// Verbosity level from the number of `-v` flags
pub fn get_verbosity(matches: &ArgMatches) -> LogLevel {
    LogLevel::from_occurrences(matches.get_count("verbose"))
}

/// Where to write the log file, if anywhere
///
/// Relative names go to the platform configuration directory unless
/// `--log-locally` is given.
pub fn get_log_file(matches: &ArgMatches) -> Result<Option<PathBuf>> {
    let filename = matches
        .get_one::<String>("log_file")
        .cloned()
        .unwrap_or_else(|| LOG_FILE_DEFAULT.to_string());

    if filename.is_empty() {
        return Ok(None);
    }

    let path = PathBuf::from(&filename);
    if matches.get_flag("log_locally") || path.is_absolute() {
        Ok(Some(path))
    } else {
        config_dir_path(&filename).map(Some)
    }
}
