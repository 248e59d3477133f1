//! Command-line definition (clap derive).

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Environment;
use crate::logger::LogLevel;
use crate::models::Category;

/// Announces new game deals to per-category chat webhooks
#[derive(Parser, Debug)]
#[command(name = "deal-notifier", version = crate::clap_long_version())]
#[command(long_about = "
Fetches the current deal listing, sorts it into the categories unter15, all,
halfprice and epic, and posts to a category's webhook whenever its matching
deals differ from the ones announced last time.

Webhook URLs are read from WEBHOOK_UNTER15, WEBHOOK_ALL, WEBHOOK_HALFPRICE and
WEBHOOK_EPIC, or from the [webhooks] table of the configuration. A category
without a URL is skipped.

EXAMPLES:
    deal-notifier                                   one pass, then exit
    deal-notifier run --category epic               one category only
    deal-notifier run --dry-run                     print the effective settings
    deal-notifier serve --port 8080                 health endpoints + passes
    deal-notifier -c /etc/deals.toml -v serve       explicit config, debug logs
")]
pub struct Cli {
    /// Defaults to `run`
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Read this TOML file instead of the layered config/ directory
    #[arg(short, long, value_name = "FILE", value_parser = super::validation::existing_file)]
    pub config: Option<PathBuf>,

    /// Which config/{env}.toml layer to load (overrides DEALS_APP_ENV)
    #[arg(short, long, value_enum)]
    pub env: Option<Environment>,

    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,

    /// Log errors only
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Process the categories once and exit
    ///
    /// The exit status is non-zero when a webhook rejects a message, a price
    /// is not a number or the state cannot be written.
    Run {
        /// Validate and print the settings without any network access
        #[arg(long)]
        dry_run: bool,

        /// Only process this category; repeat for several
        #[arg(long = "category", value_name = "NAME", value_parser = super::validation::category)]
        categories: Vec<Category>,
    },
    /// Serve /health and run passes in the background
    ///
    /// One pass runs at startup, then one per `schedule.cron` tick if a
    /// schedule is configured. Ctrl+C or SIGTERM stops the process.
    Serve {
        /// Bind address [default: 0.0.0.0]
        #[arg(long, value_name = "ADDRESS", value_parser = super::validation::host)]
        host: Option<String>,

        /// Listen port [default: 8000]
        #[arg(short, long, value_parser = clap::value_parser!(u16).range(1..))]
        port: Option<u16>,

        /// Log level; wins over --verbose and --quiet
        #[arg(long, value_enum)]
        log_level: Option<LogLevel>,

        /// Validate and print the settings without binding or fetching
        #[arg(long)]
        dry_run: bool,
    },
}

impl Cli {
    pub fn is_dry_run(&self) -> bool {
        matches!(
            self.command,
            Some(Commands::Run { dry_run: true, .. }) | Some(Commands::Serve { dry_run: true, .. })
        )
    }
}
