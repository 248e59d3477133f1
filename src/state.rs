//! Application state for the Axum router.

use std::sync::Arc;

use crate::jobs::PassRunner;
use crate::models::Category;

/// Read-only facts served by the health endpoints plus the pass runner.
///
/// Cloning is cheap; the runner sits behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub version: String,
    /// Categories with a webhook, in processing order
    pub categories: Vec<Category>,
    pub state_backend: &'static str,
    pub runner: Arc<PassRunner>,
}

impl AppState {
    pub fn new(version: impl Into<String>, runner: Arc<PassRunner>) -> Self {
        let service = runner.service();
        Self {
            version: version.into(),
            categories: service.configured_categories(),
            state_backend: service.store_name(),
            runner,
        }
    }
}
