/// Constants used throughout the application
///
/// This module centralises all constants used in the application to make
/// them easier to manage and update.

/// Wildcard entry accepted in `allowed_extensions`
///
/// Both `*` and `.*` are normalised to this value and make every file eligible.
pub const WILDCARD: &str = "*";

/// Qualifier string used for application identification
pub const QUALIFIER: &str = "com";

/// Organisation name used for application identification
pub const ORGANIZATION: &str = "Ondřej Vágner";

/// Application name used for identification
///
/// Used to locate the platform configuration directory for log files.
pub const APPLICATION: &str = "area_sort";

/// Default area pattern: a three digit code preceded by " - " and followed by "-"
pub const DEFAULT_AREA_REGEX: &str = r"\s-\s(\d{3})-";

/// Default folder for files whose name does not contain an area code
pub const DEFAULT_NO_MATCH_DEST: &str = "_NO_CLASIFICADO";

/// Default extension allow-list
pub const DEFAULT_EXTENSIONS: &[&str] = &[".pdf"];

/// Upper bound on " (n)" suffixes tried before giving up on a destination name
pub const MAX_DISAMBIGUATION_ATTEMPTS: u32 = 10_000;

/// Help text for the config command-line option
pub const CONFIG_HELP: &str = "Path to the JSON (or YAML) configuration file";

/// Help text for the dry-run command-line option
pub const DRY_RUN_HELP: &str = "Report what would happen without touching any file";

/// Help text for the verbose command-line option
pub const VERBOSE_HELP: &str = "Increase verbosity level (can be used multiple times)";

/// Help text for the log file command-line option
pub const LOG_FILE_HELP: &str = "Also write log output to this file";

/// Help text for the local logging command-line option
pub const LOCAL_LOGGING_HELP: &str =
    "Write the log file relative to the current directory instead of the config directory";

/// Default log file; empty disables file logging
pub const LOG_FILE_DEFAULT: &str = "";
