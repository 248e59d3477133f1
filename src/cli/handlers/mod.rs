//! Command handlers for CLI operations
//!
//! This module contains handlers for different CLI commands,
//! separating command execution logic from parsing and validation.

pub mod run;
pub mod serve;

pub use run::RunCommandHandler;
pub use serve::ServeCommandHandler;

use crate::config::settings::Settings;
use crate::models::Category;

/// Print the effective configuration for `--dry-run`.
///
/// Webhook URLs are reduced to their host so tokens never reach the terminal.
pub(crate) fn print_effective_config(settings: &Settings) {
    println!("✓ Configuration is valid");
    println!(
        "✓ Deals endpoint: {} (storeID={}, sortBy={}, pageSize={})",
        settings.fetcher.endpoint,
        settings.fetcher.store_id,
        settings.fetcher.sort_by,
        settings.fetcher.page_size
    );
    for category in Category::ALL {
        match settings.webhooks.url_for(category) {
            Some(url) => println!("✓ {:<10} → {}", category, redact_webhook(url)),
            None => println!("- {:<10} disabled (no webhook)", category),
        }
    }
    println!(
        "✓ State backend: {:?} in {}",
        settings.state.backend, settings.state.directory
    );
    if let Some(ref cron) = settings.schedule.cron {
        println!("✓ Schedule: {}", cron);
    }
    println!("✓ Logger level: {}", settings.logger.level);
}

fn redact_webhook(url: &str) -> String {
    match reqwest::Url::parse(url) {
        Ok(parsed) => format!(
            "{}://{}/…",
            parsed.scheme(),
            parsed.host_str().unwrap_or("?")
        ),
        Err(_) => "<invalid url>".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redact_webhook_hides_path() {
        let redacted = redact_webhook("https://discord.com/api/webhooks/123/secret-token");
        assert_eq!(redacted, "https://discord.com/…");
        assert!(!redacted.contains("secret"));
    }
}
