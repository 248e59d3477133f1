//! Run command handler
//!
//! One pass over the requested categories, then exit.

use crate::config::settings::Settings;
use crate::error::AppResult;
use crate::models::Category;
use crate::services::{DealService, RunSummary};

/// Handler for the run command
pub struct RunCommandHandler {
    config: Settings,
}

impl RunCommandHandler {
    pub fn new(config: Settings) -> Self {
        Self { config }
    }

    /// Execute the run command
    ///
    /// An empty `categories` list means every category.
    pub async fn execute(&self, dry_run: bool, categories: &[Category]) -> AppResult<()> {
        if dry_run {
            self.config.validate()?;
            super::print_effective_config(&self.config);
            println!("Dry run completed successfully - no requests were made");
            return Ok(());
        }

        let service = DealService::from_settings(&self.config);
        self.run_pass(&service, categories).await.map(|_| ())
    }

    /// Run one pass with an already wired service.
    pub async fn run_pass(
        &self,
        service: &DealService,
        categories: &[Category],
    ) -> AppResult<RunSummary> {
        let selected = self.selected_categories(categories);

        for category in &selected {
            if self.config.webhooks.url_for(*category).is_none() {
                tracing::warn!(category = %category, env_var = category.webhook_env_var(), "Category requested but no webhook configured");
            }
        }

        let summary = service.run_categories(&selected).await?;
        tracing::info!(
            processed = summary.outcomes.len(),
            notified = summary.notified(),
            "Run finished"
        );
        Ok(summary)
    }

    fn selected_categories(&self, categories: &[Category]) -> Vec<Category> {
        if categories.is_empty() {
            Category::ALL.to_vec()
        } else {
            categories.to_vec()
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &Settings {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::{StateBackend, StateConfig};
    use crate::services::CategoryOutcome;
    use crate::test_support::spawn_server;
    use axum::extract::State;
    use axum::http::StatusCode;
    use axum::routing::{get, post};
    use axum::{Json, Router};
    use serde_json::{Value, json};
    use std::sync::{Arc, Mutex};

    /// The fake upstream listing and every body posted to the fake webhook
    #[derive(Clone, Default)]
    struct Peers {
        listing: Arc<Mutex<Value>>,
        received: Arc<Mutex<Vec<Value>>>,
    }

    impl Peers {
        fn serve_listing(&self, listing: Value) {
            *self.listing.lock().unwrap() = listing;
        }

        fn contents(&self) -> Vec<String> {
            self.received
                .lock()
                .unwrap()
                .iter()
                .map(|body| body["content"].as_str().unwrap().to_string())
                .collect()
        }
    }

    fn hades() -> Value {
        json!({
            "title": "Hades",
            "salePrice": "9.99",
            "normalPrice": "24.99",
            "savings": "60.024010",
            "storeID": "1",
            "dealID": "hades-deal",
            "steamAppID": "1145360"
        })
    }

    fn elden_ring() -> Value {
        json!({
            "title": "Elden Ring",
            "salePrice": "35.99",
            "normalPrice": "59.99",
            "savings": "40.006668",
            "storeID": "1",
            "dealID": "er-deal",
            "steamAppID": "1245620"
        })
    }

    async fn upstream(State(peers): State<Peers>) -> Json<Value> {
        Json(peers.listing.lock().unwrap().clone())
    }

    async fn hook(State(peers): State<Peers>, Json(body): Json<Value>) -> StatusCode {
        peers.received.lock().unwrap().push(body);
        StatusCode::NO_CONTENT
    }

    async fn settings_with_servers(state_dir: &std::path::Path) -> (Settings, Peers) {
        let peers = Peers::default();
        peers.serve_listing(json!([hades(), elden_ring()]));
        let router = Router::new()
            .route("/api/1.0/deals", get(upstream))
            .route("/hook", post(hook))
            .with_state(peers.clone());
        let addr = spawn_server(router).await;

        let mut settings = Settings::default();
        settings.fetcher.endpoint = format!("http://{}/api/1.0/deals", addr);
        settings
            .webhooks
            .set(Category::Unter15, Some(format!("http://{}/hook", addr)));
        settings.state = StateConfig {
            backend: StateBackend::File,
            directory: state_dir.to_string_lossy().into_owned(),
        };
        (settings, peers)
    }

    fn read_state(dir: &std::path::Path, key: &str) -> String {
        std::fs::read_to_string(dir.join(key)).unwrap()
    }

    #[tokio::test]
    async fn test_run_pass_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let (settings, peers) = settings_with_servers(dir.path()).await;
        let handler = RunCommandHandler::new(settings.clone());
        let service = DealService::from_settings(&settings);

        let summary = handler.run_pass(&service, &[]).await.unwrap();
        assert_eq!(
            summary.outcome(Category::Unter15),
            Some(CategoryOutcome::Notified { count: 1 })
        );
        assert_eq!(summary.outcome(Category::All), Some(CategoryOutcome::Skipped));

        assert_eq!(
            peers.contents(),
            vec!["**Neue Angebote – Unter15**\n\n**Hades** – 9.99 € (statt 24.99 €)\nhttps://store.steampowered.com/app/1145360\n\n"]
        );
        assert_eq!(read_state(dir.path(), "last_unter15.txt"), "Hades\n");
        assert!(!dir.path().join("last_all.txt").exists());

        // Second pass sees the same listing and stays quiet.
        let summary = handler.run_pass(&service, &[]).await.unwrap();
        assert_eq!(summary.outcome(Category::Unter15), Some(CategoryOutcome::Unchanged));
        assert_eq!(peers.contents().len(), 1);
    }

    #[tokio::test]
    async fn test_run_pass_announces_when_listing_empties() {
        let dir = tempfile::tempdir().unwrap();
        let (settings, peers) = settings_with_servers(dir.path()).await;
        let handler = RunCommandHandler::new(settings.clone());
        let service = DealService::from_settings(&settings);

        handler.run_pass(&service, &[]).await.unwrap();
        assert_eq!(read_state(dir.path(), "last_unter15.txt"), "Hades\n");

        peers.serve_listing(json!([]));
        let summary = handler.run_pass(&service, &[]).await.unwrap();

        assert_eq!(
            summary.outcome(Category::Unter15),
            Some(CategoryOutcome::Notified { count: 0 })
        );
        let contents = peers.contents();
        assert_eq!(contents.len(), 2);
        assert_eq!(contents[1], "**Neue Angebote – Unter15**\n\n");
        assert_eq!(read_state(dir.path(), "last_unter15.txt"), "");

        // Still empty on the third pass: nothing more is sent.
        let summary = handler.run_pass(&service, &[]).await.unwrap();
        assert_eq!(summary.outcome(Category::Unter15), Some(CategoryOutcome::Unchanged));
        assert_eq!(peers.contents().len(), 2);
    }

    #[tokio::test]
    async fn test_run_pass_announces_reordered_listing_in_new_order() {
        let dir = tempfile::tempdir().unwrap();
        let (mut settings, peers) = settings_with_servers(dir.path()).await;
        let hook = settings.webhooks.url_for(Category::Unter15).map(String::from);
        settings.webhooks.set(Category::Unter15, None);
        settings.webhooks.set(Category::All, hook);
        let handler = RunCommandHandler::new(settings.clone());
        let service = DealService::from_settings(&settings);

        handler.run_pass(&service, &[]).await.unwrap();
        assert_eq!(read_state(dir.path(), "last_all.txt"), "Hades\nElden Ring\n");

        peers.serve_listing(json!([elden_ring(), hades()]));
        let summary = handler.run_pass(&service, &[]).await.unwrap();

        assert_eq!(
            summary.outcome(Category::All),
            Some(CategoryOutcome::Notified { count: 2 })
        );
        let contents = peers.contents();
        assert_eq!(contents.len(), 2);
        assert_eq!(
            contents[1],
            "**Neue Angebote – All**\n\n\
             **Elden Ring** – 35.99 € (statt 59.99 €)\nhttps://store.steampowered.com/app/1245620\n\n\
             **Hades** – 9.99 € (statt 24.99 €)\nhttps://store.steampowered.com/app/1145360\n\n"
        );
        assert_eq!(read_state(dir.path(), "last_all.txt"), "Elden Ring\nHades\n");
    }

    #[tokio::test]
    async fn test_run_pass_respects_category_selection() {
        let dir = tempfile::tempdir().unwrap();
        let (settings, peers) = settings_with_servers(dir.path()).await;
        let handler = RunCommandHandler::new(settings.clone());
        let service = DealService::from_settings(&settings);

        let summary = handler.run_pass(&service, &[Category::Epic]).await.unwrap();
        assert_eq!(summary.outcomes, vec![(Category::Epic, CategoryOutcome::Skipped)]);
        assert!(peers.contents().is_empty());
    }

    #[tokio::test]
    async fn test_dry_run_makes_no_requests() {
        let mut settings = Settings::default();
        settings.webhooks.set(Category::All, Some("http://127.0.0.1:9/hook".to_string()));
        let handler = RunCommandHandler::new(settings);

        assert!(handler.execute(true, &[]).await.is_ok());
    }

    #[tokio::test]
    async fn test_dry_run_rejects_invalid_config() {
        let mut settings = Settings::default();
        settings.notifier.timeout_seconds = 0;
        let handler = RunCommandHandler::new(settings);

        assert!(handler.execute(true, &[]).await.is_err());
    }
}
