//! Non-overlapping execution of pipeline passes.

use std::sync::{Arc, RwLock};

use jiff::Timestamp;
use serde::Serialize;
use tokio::sync::Mutex;

use crate::error::AppResult;
use crate::models::Category;
use crate::services::{DealService, RunSummary};

/// Result of the most recent finished pass, exposed on `/health`.
#[derive(Debug, Clone, Serialize)]
pub struct PassReport {
    pub finished_at: Timestamp,
    pub success: bool,
    pub notified: usize,
    pub error: Option<String>,
}

/// Runs passes of the deal pipeline, at most one at a time.
///
/// A pass requested while another is still in flight is skipped rather
/// than queued.
pub struct PassRunner {
    service: DealService,
    categories: Vec<Category>,
    in_flight: Mutex<()>,
    last_report: RwLock<Option<PassReport>>,
}

impl PassRunner {
    pub fn new(service: DealService, categories: Vec<Category>) -> Self {
        Self {
            service,
            categories,
            in_flight: Mutex::new(()),
            last_report: RwLock::new(None),
        }
    }

    pub fn service(&self) -> &DealService {
        &self.service
    }

    /// Run one pass unless one is already running.
    ///
    /// Returns `None` when the pass was skipped.
    pub async fn run_once(&self) -> Option<AppResult<RunSummary>> {
        let Ok(_guard) = self.in_flight.try_lock() else {
            tracing::warn!("Previous pass still running, skipping this one");
            return None;
        };

        tracing::info!(categories = ?self.categories, "Starting pass");
        let result = self.service.run_categories(&self.categories).await;

        let report = match &result {
            Ok(summary) => {
                tracing::info!(notified = summary.notified(), "Pass finished");
                PassReport {
                    finished_at: Timestamp::now(),
                    success: true,
                    notified: summary.notified(),
                    error: None,
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "Pass failed");
                PassReport {
                    finished_at: Timestamp::now(),
                    success: false,
                    notified: 0,
                    error: Some(e.to_string()),
                }
            }
        };

        if let Ok(mut last) = self.last_report.write() {
            *last = Some(report);
        }

        Some(result)
    }

    pub fn last_report(&self) -> Option<PassReport> {
        self.last_report.read().ok().and_then(|r| r.clone())
    }
}

/// Run a pass on a background task, logging instead of returning the result.
pub fn spawn_pass(runner: Arc<PassRunner>) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        runner.run_once().await;
    })
}
