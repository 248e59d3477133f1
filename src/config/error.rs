//! Errors raised while assembling `Settings`

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// `--config` or `DEALS_CONFIG_FILE` names a file that is not there
    #[error("config file {} does not exist", .0.display())]
    MissingFile(PathBuf),

    #[error("DEALS_CONFIG_DIR and DEALS_CONFIG_FILE are both set; use one of them")]
    ConflictingSources,

    /// A value deserialized fine but is out of range or malformed
    #[error("invalid {field}: {message}")]
    Invalid { field: String, message: String },

    /// Reading, merging or deserializing the sources failed
    #[error(transparent)]
    Source(#[from] config::ConfigError),
}

impl ConfigError {
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        ConfigError::Invalid {
            field: field.into(),
            message: message.into(),
        }
    }
}
