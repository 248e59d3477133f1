//! Deployment environment: picks the `config/{name}.toml` layer loaded
//! between `default.toml` and `local.toml`.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local work on a developer machine; loads `development.toml`
    #[default]
    #[value(alias = "dev")]
    Development,
    /// Automated test runs; loads `test.toml`
    Test,
    /// Pre-release deployment; loads `staging.toml`
    #[value(alias = "stage")]
    Staging,
    /// Live deployment announcing to the real channels; loads `production.toml`
    #[value(alias = "prod")]
    Production,
}

impl Environment {
    pub const ENV_VAR: &'static str = "DEALS_APP_ENV";

    /// `DEALS_APP_ENV`, matched case-insensitively; unset or unknown means `Development`.
    pub fn from_env() -> Self {
        std::env::var(Self::ENV_VAR)
            .ok()
            .and_then(|value| <Self as ValueEnum>::from_str(value.trim(), true).ok())
            .unwrap_or_default()
    }

    /// File stem of the layer, e.g. `production`
    pub fn as_str(self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Test => "test",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }
}
