//! `serve`: the health server plus background passes.

use crate::config::Settings;
use crate::error::{AppError, AppResult};
use crate::server::Server;

pub struct ServeCommandHandler {
    config: Settings,
}

impl ServeCommandHandler {
    pub fn new(config: Settings) -> Self {
        Self { config }
    }

    /// With `dry_run`, validate and print the settings and return without
    /// binding a port; otherwise serve until shutdown.
    pub async fn execute(&self, dry_run: bool) -> AppResult<()> {
        if dry_run {
            self.config.validate()?;
            super::print_effective_config(&self.config);
            println!("✓ Would listen on {}", self.config.server.address());
            println!("Dry run finished; nothing was started");
            return Ok(());
        }

        Server::new(self.config.clone())
            .run()
            .await
            .map_err(|source| AppError::Internal { source })
    }

    pub fn config(&self) -> &Settings {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_dry_run_accepts_defaults() {
        let handler = ServeCommandHandler::new(Settings::default());
        assert_eq!(handler.config(), &Settings::default());
        assert!(handler.execute(true).await.is_ok());
    }

    #[tokio::test]
    async fn test_dry_run_reports_invalid_settings() {
        let mut config = Settings::default();
        config.schedule.cron = Some("every hour".to_string());

        let err = ServeCommandHandler::new(config).execute(true).await.unwrap_err();
        assert!(matches!(err, AppError::Configuration { .. }));
    }

    #[tokio::test]
    async fn test_occupied_port_is_an_error() {
        let taken = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let mut config = Settings::default();
        config.server.host = "127.0.0.1".to_string();
        config.server.port = taken.local_addr().unwrap().port();

        let err = ServeCommandHandler::new(config).execute(false).await.unwrap_err();
        assert!(matches!(err, AppError::Internal { .. }));
    }
}
