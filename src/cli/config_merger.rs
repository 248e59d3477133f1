//! Command-line flags layered over file and environment configuration.

use super::parser::{Cli, Commands};
use crate::config::{ConfigError, ConfigLoader, Settings};
use crate::logger::LogLevel;

pub struct ConfigurationMerger {
    base_config: Settings,
}

impl ConfigurationMerger {
    pub fn new(base_config: Settings) -> Self {
        Self { base_config }
    }

    /// Load the base settings, honoring the global `--config` and `--env`.
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let mut loader = ConfigLoader::new()?;
        if let Some(path) = &cli.config {
            loader = loader.with_config_file(path);
        }
        if let Some(environment) = cli.env {
            loader = loader.with_environment(environment);
        }
        Ok(Self::new(loader.load()?))
    }

    /// A copy of the base settings with the flags applied, validated again.
    pub fn merge_cli_args(&self, cli: &Cli) -> Result<Settings, ConfigError> {
        let mut settings = self.base_config.clone();

        if let Some(level) = requested_log_level(cli) {
            settings.logger.level = level;
        }
        if let Some(Commands::Serve { host, port, .. }) = &cli.command {
            if let Some(host) = host {
                settings.server.host = host.clone();
            }
            if let Some(port) = port {
                settings.server.port = *port;
            }
        }

        settings.validate()?;
        Ok(settings)
    }

    pub fn config(&self) -> &Settings {
        &self.base_config
    }
}

/// `serve --log-level` first, then `--verbose` / `--quiet`
fn requested_log_level(cli: &Cli) -> Option<LogLevel> {
    let serve_level = match &cli.command {
        Some(Commands::Serve { log_level, .. }) => *log_level,
        _ => None,
    };

    serve_level.or(if cli.verbose {
        Some(LogLevel::Debug)
    } else if cli.quiet {
        Some(LogLevel::Error)
    } else {
        None
    })
}
