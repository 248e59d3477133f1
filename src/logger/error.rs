use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("cannot open log file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid logger settings: {0}")]
    Invalid(String),

    /// A global subscriber was installed earlier in this process
    #[error("logger already initialized: {0}")]
    AlreadyInstalled(String),
}
