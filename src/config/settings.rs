//! Typed configuration tree.
//!
//! Every section carries `#[serde(default)]`, so any subset of keys can be
//! given in TOML or `DEALS_*` variables and the rest keeps its default.

use serde::{Deserialize, Serialize};

use crate::logger::LoggerConfig;
use crate::models::Category;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationConfig {
    pub name: String,
    pub version: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            name: "deal-notifier".to_string(),
            version: crate::pkg_version().to_string(),
        }
    }
}

/// Bind address of the liveness endpoints in `serve` mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// `host:port`, as accepted by `TcpListener::bind`
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

/// Where and how the deal listing is requested.
///
/// `store_id`, `sort_by` and `page_size` become the `storeID`, `sortBy`
/// and `pageSize` query parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetcherConfig {
    pub endpoint: String,
    pub store_id: String,
    pub sort_by: String,
    pub page_size: u32,
    pub timeout_seconds: u64,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://www.cheapshark.com/api/1.0/deals".to_string(),
            store_id: "1".to_string(),
            sort_by: "Deal Rating".to_string(),
            page_size: 20,
            timeout_seconds: 30,
        }
    }
}

/// Delivery settings shared by every category's webhook
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotifierConfig {
    /// JSON key holding the message text: `content` for Discord, `text` for Slack
    pub payload_field: String,
    pub timeout_seconds: u64,
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            payload_field: "content".to_string(),
            timeout_seconds: 30,
        }
    }
}

/// One optional webhook URL per category. Blank counts as unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct WebhooksConfig {
    pub unter15: Option<String>,
    pub all: Option<String>,
    pub halfprice: Option<String>,
    pub epic: Option<String>,
}

impl WebhooksConfig {
    fn slot(&self, category: Category) -> &Option<String> {
        match category {
            Category::Unter15 => &self.unter15,
            Category::All => &self.all,
            Category::HalfPrice => &self.halfprice,
            Category::Epic => &self.epic,
        }
    }

    /// Trimmed URL for the category, `None` when missing or blank
    pub fn url_for(&self, category: Category) -> Option<&str> {
        self.slot(category)
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    pub fn set(&mut self, category: Category, url: Option<String>) {
        let slot = match category {
            Category::Unter15 => &mut self.unter15,
            Category::All => &mut self.all,
            Category::HalfPrice => &mut self.halfprice,
            Category::Epic => &mut self.epic,
        };
        *slot = url;
    }

    /// Categories that have a URL, in processing order
    pub fn enabled_categories(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|c| self.url_for(*c).is_some())
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StateBackend {
    /// `last_<category>.txt` files under `directory`
    #[default]
    File,
    /// Process memory; forgotten on exit
    Memory,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StateConfig {
    pub backend: StateBackend,
    pub directory: String,
}

impl Default for StateConfig {
    fn default() -> Self {
        Self {
            backend: StateBackend::File,
            directory: ".".to_string(),
        }
    }
}

/// Repeated passes in `serve` mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScheduleConfig {
    /// Cron expression with a leading seconds field; `None` runs only the startup pass
    pub cron: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    pub application: ApplicationConfig,
    pub server: ServerConfig,
    pub fetcher: FetcherConfig,
    pub notifier: NotifierConfig,
    pub webhooks: WebhooksConfig,
    pub state: StateConfig,
    pub schedule: ScheduleConfig,
    pub logger: LoggerConfig,
}
