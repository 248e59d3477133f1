//! The per-category notification pipeline.
//!
//! fetch → filter → compare with last-seen titles → deliver → persist.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::config::Settings;
use crate::error::{AppError, AppResult};
use crate::external::{CheapSharkClient, DealProvider};
use crate::filters::{apply_filter, get_filter};
use crate::models::Category;
use crate::services::formatter::format_notification;
use crate::services::notifications::{NotificationMessage, NotificationProvider, WebhookProvider};
use crate::store::{StateStore, create_store};

/// What a pass did for one category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryOutcome {
    /// No webhook configured; nothing was fetched, read or written
    Skipped,
    /// Matched titles equal the last-seen titles
    Unchanged,
    /// A notification with `count` deals was delivered and the state rewritten.
    /// A count of zero is the header-only message sent when the last match disappears.
    Notified { count: usize },
}

impl fmt::Display for CategoryOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryOutcome::Skipped => f.write_str("skipped"),
            CategoryOutcome::Unchanged => f.write_str("unchanged"),
            CategoryOutcome::Notified { count } => write!(f, "notified ({} deals)", count),
        }
    }
}

/// Outcomes of one pass, in processing order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub outcomes: Vec<(Category, CategoryOutcome)>,
}

impl RunSummary {
    pub fn notified(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, o)| matches!(o, CategoryOutcome::Notified { .. }))
            .count()
    }

    pub fn outcome(&self, category: Category) -> Option<CategoryOutcome> {
        self.outcomes
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, o)| *o)
    }
}

/// Runs the notification pipeline for the configured categories.
///
/// Cloning is cheap; all collaborators sit behind `Arc`.
#[derive(Clone)]
pub struct DealService {
    fetcher: Arc<dyn DealProvider>,
    store: Arc<dyn StateStore>,
    providers: HashMap<Category, Arc<dyn NotificationProvider>>,
}

impl DealService {
    /// A service with no delivery targets; add them with `with_provider`.
    pub fn new(fetcher: Arc<dyn DealProvider>, store: Arc<dyn StateStore>) -> Self {
        Self {
            fetcher,
            store,
            providers: HashMap::new(),
        }
    }

    pub fn with_provider(
        mut self,
        category: Category,
        provider: Arc<dyn NotificationProvider>,
    ) -> Self {
        self.providers.insert(category, provider);
        self
    }

    /// Wire the production fetcher, the configured state backend and one
    /// webhook provider per category that has a URL.
    pub fn from_settings(settings: &Settings) -> Self {
        let fetcher = Arc::new(CheapSharkClient::new(&settings.fetcher));
        let store = create_store(&settings.state);

        Category::ALL
            .into_iter()
            .filter_map(|category| {
                settings.webhooks.url_for(category).map(|url| {
                    let provider: Arc<dyn NotificationProvider> =
                        Arc::new(WebhookProvider::new(category, url, &settings.notifier));
                    (category, provider)
                })
            })
            .fold(Self::new(fetcher, store), |service, (category, provider)| {
                service.with_provider(category, provider)
            })
    }

    /// Categories with a delivery target, in processing order
    pub fn configured_categories(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|c| self.providers.contains_key(c))
            .collect()
    }

    pub fn store_name(&self) -> &'static str {
        self.store.name()
    }

    /// Process every category once.
    pub async fn run_all(&self) -> AppResult<RunSummary> {
        self.run_categories(&Category::ALL).await
    }

    /// Process the given categories in the fixed processing order.
    ///
    /// The first error aborts the pass; categories after it are not touched.
    pub async fn run_categories(&self, categories: &[Category]) -> AppResult<RunSummary> {
        let mut summary = RunSummary::default();

        for category in Category::ALL
            .into_iter()
            .filter(|c| categories.contains(c))
        {
            let outcome = self.process_category(category).await?;
            tracing::info!(category = %category, outcome = %outcome, "Category processed");
            summary.outcomes.push((category, outcome));
        }

        Ok(summary)
    }

    /// Run the pipeline for a single category.
    pub async fn process_category(&self, category: Category) -> AppResult<CategoryOutcome> {
        let Some(provider) = self.providers.get(&category) else {
            tracing::debug!(category = %category, "No webhook configured, skipping");
            return Ok(CategoryOutcome::Skipped);
        };

        let deals = self.fetcher.fetch_deals().await;
        let matched = apply_filter(get_filter(category), &deals)?;
        let titles: Vec<String> = matched.iter().map(|d| d.title.clone()).collect();

        let key = category.state_file();
        let previous = self
            .store
            .load(key)
            .await
            .map_err(|source| AppError::State {
                operation: format!("load {}", key),
                source,
            })?;

        if titles == previous {
            tracing::debug!(category = %category, count = titles.len(), "No change since last notification");
            return Ok(CategoryOutcome::Unchanged);
        }

        let message = NotificationMessage {
            category,
            content: format_notification(category, &matched),
        };
        let result = provider.send(&message).await?;
        tracing::info!(
            category = %category,
            provider = provider.name(),
            count = titles.len(),
            duration_ms = result.duration_ms,
            "Notification delivered"
        );

        self.save(key, &titles).await?;
        Ok(CategoryOutcome::Notified {
            count: titles.len(),
        })
    }

    async fn save(&self, key: &str, titles: &[String]) -> AppResult<()> {
        self.store
            .save(key, titles)
            .await
            .map_err(|source| AppError::State {
                operation: format!("save {}", key),
                source,
            })
    }
}
