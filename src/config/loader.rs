//! Assembles `Settings` from TOML files and the process environment.

use std::path::PathBuf;

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat};

use crate::config::environment::Environment;
use crate::config::error::ConfigError;
use crate::config::settings::Settings;
use crate::models::Category;

const CONFIG_DIR_ENV: &str = "DEALS_CONFIG_DIR";
const CONFIG_FILE_ENV: &str = "DEALS_CONFIG_FILE";
const DEFAULT_CONFIG_DIR: &str = "config";

/// `DEALS_SERVER__PORT` → `server.port`
const ENV_PREFIX: &str = "DEALS";
const ENV_SEPARATOR: &str = "__";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Files {
    /// `default.toml`, `{environment}.toml` and `local.toml`, each optional
    Layered(PathBuf),
    /// Exactly this file, which must exist
    Single(PathBuf),
}

/// Loads settings from, lowest priority first:
///
/// 1. the TOML files (layered directory or one explicit file)
/// 2. `DEALS_*` variables
/// 3. non-blank `WEBHOOK_UNTER15`, `WEBHOOK_ALL`, `WEBHOOK_HALFPRICE`, `WEBHOOK_EPIC`
#[derive(Debug)]
pub struct ConfigLoader {
    files: Files,
    environment: Environment,
}

impl ConfigLoader {
    /// Reads `DEALS_CONFIG_DIR`, `DEALS_CONFIG_FILE` and `DEALS_APP_ENV`.
    ///
    /// # Errors
    ///
    /// `ConflictingSources` when both the directory and the file variable are set.
    pub fn new() -> Result<Self, ConfigError> {
        let dir = env_path(CONFIG_DIR_ENV);
        let file = env_path(CONFIG_FILE_ENV);

        let files = match (dir, file) {
            (Some(_), Some(_)) => return Err(ConfigError::ConflictingSources),
            (None, Some(file)) => Files::Single(file),
            (dir, None) => {
                Files::Layered(dir.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_DIR)))
            }
        };

        Ok(Self {
            files,
            environment: Environment::from_env(),
        })
    }

    /// Read only `path`, skipping the layered directory.
    pub fn with_config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.files = Files::Single(path.into());
        self
    }

    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// Merge every source, deserialize and validate.
    pub fn load(&self) -> Result<Settings, ConfigError> {
        let settings: Settings = self.builder()?.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    fn builder(&self) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let mut builder = Config::builder();

        for (path, required) in self.toml_files() {
            if required && !path.is_file() {
                return Err(ConfigError::MissingFile(path));
            }
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(required));
        }

        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator(ENV_SEPARATOR)
                .ignore_empty(true)
                .try_parsing(true),
        );

        for category in Category::ALL {
            let url = std::env::var(category.webhook_env_var())
                .ok()
                .filter(|v| !v.trim().is_empty());
            builder = builder.set_override_option(format!("webhooks.{}", category), url)?;
        }

        Ok(builder)
    }

    fn toml_files(&self) -> Vec<(PathBuf, bool)> {
        match &self.files {
            Files::Single(path) => vec![(path.clone(), true)],
            Files::Layered(dir) => ["default", self.environment.as_str(), "local"]
                .into_iter()
                .map(|stem| (dir.join(format!("{}.toml", stem)), false))
                .collect(),
        }
    }
}

fn env_path(key: &str) -> Option<PathBuf> {
    std::env::var_os(key)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}
