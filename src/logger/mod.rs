//! `tracing-subscriber` setup: a console layer and an optional log file in
//! full, compact or JSON layout.

pub mod config;
pub mod error;

pub use config::{ConsoleOutput, FileOutput, LogFormat, LogLevel, LoggerConfig};
pub use error::LoggerError;

use std::fs::{File, OpenOptions};
use std::io::IsTerminal;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, Layer, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Install the process-wide subscriber.
pub fn init_logger(config: &LoggerConfig) -> Result<(), LoggerError> {
    config.validate()?;

    let filter = EnvFilter::new(config.level.as_str());

    // The file layer is registered before the console one; otherwise the
    // console's ANSI setting bleeds into the file (tokio-rs/tracing#1817).
    let mut layers: Vec<BoxedLayer> = Vec::with_capacity(2);
    if config.file.enabled {
        layers.push(file_layer(&config.file)?);
    }
    if config.console.enabled {
        let ansi = config.console.colored && std::io::stdout().is_terminal();
        layers.push(fmt::layer().with_ansi(ansi).with_target(true).boxed());
    }

    tracing_subscriber::registry()
        .with(layers)
        .with(filter)
        .try_init()
        .map_err(|e| LoggerError::AlreadyInstalled(e.to_string()))
}

fn file_layer(output: &FileOutput) -> Result<BoxedLayer, LoggerError> {
    let writer = Mutex::new(open_log_file(output)?);
    let base = fmt::layer().with_ansi(false).with_target(true);

    Ok(match output.format {
        LogFormat::Full => base.with_writer(writer).boxed(),
        LogFormat::Compact => base.compact().with_writer(writer).boxed(),
        LogFormat::Json => base.json().with_writer(writer).boxed(),
    })
}

fn open_log_file(output: &FileOutput) -> Result<File, LoggerError> {
    if let Some(dir) = output.path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)?;
    }

    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .append(output.append)
        .truncate(!output.append)
        .open(&output.path)?;
    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_log_file_parent_is_created() {
        let dir = tempdir().unwrap();
        let output = FileOutput {
            enabled: true,
            path: dir.path().join("logs").join("deals.log"),
            ..Default::default()
        };
        open_log_file(&output).unwrap();
        assert!(output.path.is_file());
    }

    #[test]
    fn test_log_file_truncated_unless_appending() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("deals.log");
        std::fs::write(&path, "previous run\n").unwrap();

        let output = FileOutput {
            enabled: true,
            path: path.clone(),
            append: false,
            format: LogFormat::Json,
        };
        open_log_file(&output).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_init_rejects_config_without_outputs() {
        let config = LoggerConfig {
            console: ConsoleOutput {
                enabled: false,
                colored: true,
            },
            ..Default::default()
        };
        assert!(matches!(init_logger(&config), Err(LoggerError::Invalid(_))));
    }
}
