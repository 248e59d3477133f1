use thiserror::Error;

use crate::config::ConfigError;
use crate::store::StoreError;

/// Application-wide error type for the deal notification pipeline.
///
/// Fetch failures are always recovered inside the fetcher; the remaining
/// variants propagate out of a pipeline pass and abort it.
#[derive(Error, Debug)]
pub enum AppError {
    /// A price or savings field could not be read as a decimal number
    #[error("Invalid number in {field} of deal '{deal}': '{value}'")]
    InvalidNumber {
        field: String,
        value: String,
        deal: String,
    },

    /// Upstream deal listing could not be fetched or decoded
    #[error("Deal fetch failed: {message}")]
    Fetch {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    /// Webhook delivery failed for a category
    #[error("Delivery to '{category}' failed: {message}")]
    Delivery {
        category: String,
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    /// Last-seen state could not be read or written
    #[error("State store operation failed: {operation}")]
    State {
        operation: String,
        #[source]
        source: StoreError,
    },

    /// A user-supplied value (such as a category name) was not recognised
    #[error("Validation failed for {field}: {reason}")]
    Validation { field: String, reason: String },

    /// Settings failed to load or validate; `key` names the offending field when known
    #[error("Configuration error: {key}")]
    Configuration {
        key: String,
        #[source]
        source: anyhow::Error,
    },

    /// Server startup or runtime failure in `serve`
    #[error("Internal error")]
    Internal {
        #[source]
        source: anyhow::Error,
    },
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        AppError::Internal { source: error }
    }
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        let key = match &error {
            ConfigError::Invalid { field, .. } => field.clone(),
            _ => "settings".to_string(),
        };
        AppError::Configuration {
            key,
            source: error.into(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
