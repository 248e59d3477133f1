//! Command-line front end: argument parsing, settings assembly and dispatch
//! to the `run` and `serve` handlers.

pub mod config_merger;
pub mod executor;
pub mod handlers;
pub mod parser;
pub mod validation;

pub use config_merger::ConfigurationMerger;
pub use executor::execute_command;
pub use parser::{Cli, Commands};

use anyhow::Context;

use crate::config::Settings;
use crate::logger::init_logger;

/// Files and environment first, then the command-line flags.
pub fn load_and_merge_config(cli: &Cli) -> anyhow::Result<Settings> {
    ConfigurationMerger::from_cli(cli)
        .context("Failed to load configuration")?
        .merge_cli_args(cli)
        .context("Invalid command-line override")
}

pub fn init_logger_from_settings(settings: &Settings) -> anyhow::Result<()> {
    init_logger(&settings.logger).context("Failed to initialize logging")
}
