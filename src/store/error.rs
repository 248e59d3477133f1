//! State store error types.

use thiserror::Error;

/// Errors that can occur while loading or saving last-seen state.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("State I/O failed for '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("State operation failed: {0}")]
    Operation(String),
}
