//! Logger settings, deserialized straight from the `[logger]` table.

use std::fmt;
use std::path::PathBuf;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::logger::LoggerError;

/// Minimum level that reaches any output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    #[serde(alias = "warning")]
    #[value(alias = "warning")]
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Line layout of the log file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Full,
    Compact,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleOutput {
    pub enabled: bool,
    /// ANSI colors; ignored when stdout is not a terminal
    pub colored: bool,
}

impl Default for ConsoleOutput {
    fn default() -> Self {
        Self {
            enabled: true,
            colored: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutput {
    pub enabled: bool,
    pub path: PathBuf,
    /// Keep earlier lines instead of truncating at startup
    pub append: bool,
    pub format: LogFormat,
}

impl Default for FileOutput {
    fn default() -> Self {
        Self {
            enabled: false,
            path: PathBuf::from("logs/deal-notifier.log"),
            append: true,
            format: LogFormat::Full,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub level: LogLevel,
    pub console: ConsoleOutput,
    pub file: FileOutput,
}

impl LoggerConfig {
    /// Checks that serde cannot express: some output is on, and an enabled
    /// file output has a path.
    pub fn validate(&self) -> Result<(), LoggerError> {
        if !self.console.enabled && !self.file.enabled {
            return Err(LoggerError::Invalid(
                "console and file output are both disabled".to_string(),
            ));
        }
        if self.file.enabled && self.file.path.as_os_str().is_empty() {
            return Err(LoggerError::Invalid(
                "file output is enabled but has no path".to_string(),
            ));
        }
        Ok(())
    }
}
