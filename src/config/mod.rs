//! Layered configuration.
//!
//! Precedence, lowest first: `config/default.toml`, `config/{environment}.toml`,
//! `config/local.toml` (all optional, or a single `--config` file instead),
//! `DEALS_*` variables, then the `WEBHOOK_*` variables. Command-line flags
//! are applied on top by `cli::ConfigurationMerger`.

pub mod environment;
pub mod error;
pub mod loader;
pub mod settings;
pub mod validation;

pub use environment::Environment;
pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use settings::Settings;
