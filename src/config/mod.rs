//! Configuration module
//!
//! This module contains components for loading and validating configuration.

mod loader;
mod model;

pub use loader::{ConfigFormat, load_config, load_config_for_testing, parse_config};
pub use model::{Action, Config, ConfigBuilder, RawConfig};
