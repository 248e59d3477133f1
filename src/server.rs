//! Long-running `serve` mode.
//!
//! Binds the health endpoints, starts the first pass in the background,
//! registers the cron schedule if one is configured, and stops on Ctrl+C
//! or SIGTERM.

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use crate::api::routes::create_router;
use crate::config::{Environment, Settings};
use crate::jobs::{PassRunner, PassScheduler, spawn_pass};
use crate::models::Category;
use crate::services::DealService;
use crate::state::AppState;

pub struct Server {
    settings: Settings,
}

impl Server {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Serve until a shutdown signal arrives.
    ///
    /// # Errors
    ///
    /// The bind address is taken, the cron expression is rejected by the
    /// scheduler, or axum fails while serving.
    pub async fn run(self) -> anyhow::Result<()> {
        let Settings {
            application,
            server,
            schedule,
            ..
        } = &self.settings;

        tracing::info!(
            name = %application.name,
            version = %application.version,
            environment = Environment::from_env().as_str(),
            "Starting deal notifier"
        );

        let runner = Arc::new(self.build_runner());
        let router = create_router(AppState::new(application.version.clone(), runner.clone()));

        let address = server.address();
        let listener = TcpListener::bind(&address)
            .await
            .with_context(|| format!("cannot bind {}", address))?;

        let scheduler = match &schedule.cron {
            Some(cron) => {
                let scheduler = PassScheduler::new(runner.clone(), cron).await?;
                scheduler.start().await?;
                tracing::info!(cron = %cron, "Recurring passes scheduled");
                Some(scheduler)
            }
            None => None,
        };

        tracing::info!(address = %address, "Listening");
        spawn_pass(runner);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("HTTP server failed")?;

        if let Some(scheduler) = scheduler
            && let Err(e) = scheduler.stop().await
        {
            tracing::warn!(error = %e, "Scheduler did not stop cleanly");
        }
        tracing::info!("Stopped");
        Ok(())
    }

    fn build_runner(&self) -> PassRunner {
        let service = DealService::from_settings(&self.settings);
        let targets = service.configured_categories();
        if targets.is_empty() {
            tracing::warn!("No webhook configured; passes will announce nothing");
        } else {
            tracing::info!(categories = ?targets, state_backend = service.store_name(), "Announcing to configured webhooks");
        }
        PassRunner::new(service, Category::ALL.to_vec())
    }
}

/// Resolves on Ctrl+C or, on unix, SIGTERM. A handler that cannot be
/// installed never resolves, leaving the other one in charge.
async fn shutdown_signal() {
    let interrupt = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => "Ctrl+C",
            Err(e) => {
                tracing::error!(error = %e, "Cannot listen for Ctrl+C");
                std::future::pending().await
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                "SIGTERM"
            }
            Err(e) => {
                tracing::error!(error = %e, "Cannot listen for SIGTERM");
                std::future::pending().await
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<&str>();

    let received = tokio::select! {
        name = interrupt => name,
        name = terminate => name,
    };
    tracing::info!(signal = received, "Shutting down");
}
