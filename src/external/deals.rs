//! Upstream deal listing (CheapShark `deals` endpoint).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;

use crate::config::settings::FetcherConfig;
use crate::error::{AppError, AppResult};
use crate::external::client::HTTP_CLIENT;
use crate::models::Deal;

/// Source of the current deal listing
///
/// Fetching never fails from the caller's point of view: any transport,
/// status or decoding problem is logged and yields an empty list.
#[async_trait]
pub trait DealProvider: Send + Sync {
    async fn fetch_deals(&self) -> Vec<Deal>;

    /// Provider name for logging
    fn name(&self) -> &'static str;
}

/// Fetches one page of deals sorted by the configured criterion.
pub struct CheapSharkClient {
    config: FetcherConfig,
}

impl CheapSharkClient {
    pub fn new(config: &FetcherConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    fn make_error(message: impl Into<String>, source: Option<anyhow::Error>) -> AppError {
        AppError::Fetch {
            message: message.into(),
            source,
        }
    }

    /// Listing URL including the query string
    pub fn request_url(&self) -> AppResult<Url> {
        let page_size = self.config.page_size.to_string();
        Url::parse_with_params(
            &self.config.endpoint,
            &[
                ("storeID", self.config.store_id.as_str()),
                ("sortBy", self.config.sort_by.as_str()),
                ("pageSize", page_size.as_str()),
            ],
        )
        .map_err(|e| {
            Self::make_error(
                format!("invalid endpoint '{}': {}", self.config.endpoint, e),
                Some(e.into()),
            )
        })
    }

    async fn try_fetch(&self) -> AppResult<Vec<Deal>> {
        let url = self.request_url()?;

        let resp = HTTP_CLIENT
            .get(url)
            .timeout(Duration::from_secs(self.config.timeout_seconds))
            .send()
            .await
            .map_err(|e: reqwest::Error| {
                Self::make_error(format!("request failed: {}", e), Some(e.into()))
            })?
            .error_for_status()
            .map_err(|e: reqwest::Error| {
                Self::make_error(format!("HTTP error: {}", e), Some(e.into()))
            })?;

        resp.json::<Vec<Deal>>().await.map_err(|e: reqwest::Error| {
            Self::make_error(format!("invalid JSON: {}", e), Some(e.into()))
        })
    }
}

#[async_trait]
impl DealProvider for CheapSharkClient {
    async fn fetch_deals(&self) -> Vec<Deal> {
        match self.try_fetch().await {
            Ok(deals) => {
                tracing::debug!(count = deals.len(), "Fetched deals");
                deals
            }
            Err(e) => {
                tracing::error!(error = %e, endpoint = %self.config.endpoint, "Failed to fetch deals");
                Vec::new()
            }
        }
    }

    fn name(&self) -> &'static str {
        "cheapshark"
    }
}
