//! Range and format checks run after deserialization.
//!
//! Each section validates itself; `Settings::validate` stops at the first
//! failure.

use reqwest::Url;

use crate::config::error::ConfigError;
use crate::config::settings::{
    FetcherConfig, NotifierConfig, ScheduleConfig, ServerConfig, Settings, WebhooksConfig,
};
use crate::models::Category;

/// Largest page the deals API serves
const MAX_PAGE_SIZE: u32 = 60;

fn ensure(condition: bool, field: &str, message: impl Into<String>) -> Result<(), ConfigError> {
    if condition {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, message))
    }
}

fn http_url(field: &str, value: &str) -> Result<(), ConfigError> {
    let url = Url::parse(value)
        .map_err(|e| ConfigError::invalid(field, format!("'{}' is not a URL ({})", value, e)))?;
    ensure(
        matches!(url.scheme(), "http" | "https"),
        field,
        format!("'{}' must use http or https", value),
    )
}

impl ServerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure(!self.host.trim().is_empty(), "server.host", "must not be empty")?;
        ensure(self.port != 0, "server.port", "must be between 1 and 65535")
    }
}

impl FetcherConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        http_url("fetcher.endpoint", &self.endpoint)?;
        ensure(
            (1..=MAX_PAGE_SIZE).contains(&self.page_size),
            "fetcher.page_size",
            format!("must be between 1 and {}", MAX_PAGE_SIZE),
        )?;
        ensure(self.timeout_seconds > 0, "fetcher.timeout_seconds", "must be at least 1")
    }
}

impl NotifierConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure(
            !self.payload_field.trim().is_empty(),
            "notifier.payload_field",
            "must not be empty",
        )?;
        ensure(self.timeout_seconds > 0, "notifier.timeout_seconds", "must be at least 1")
    }
}

impl WebhooksConfig {
    /// Blank entries are skipped; anything else must be an http(s) URL.
    pub fn validate(&self) -> Result<(), ConfigError> {
        Category::ALL.into_iter().try_for_each(|category| {
            self.url_for(category)
                .map_or(Ok(()), |url| http_url(&format!("webhooks.{}", category), url))
        })
    }
}

impl ScheduleConfig {
    /// Six fields (seconds first) or seven (trailing year).
    pub fn validate(&self) -> Result<(), ConfigError> {
        let Some(cron) = &self.cron else {
            return Ok(());
        };
        ensure(
            matches!(cron.split_whitespace().count(), 6 | 7),
            "schedule.cron",
            format!("'{}' needs 6 or 7 fields: sec min hour day month weekday [year]", cron),
        )
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.server.validate()?;
        self.fetcher.validate()?;
        self.notifier.validate()?;
        self.webhooks.validate()?;
        self.schedule.validate()?;
        self.logger
            .validate()
            .map_err(|e| ConfigError::invalid("logger", e.to_string()))
    }
}
