//! Dispatch of the parsed command to its handler.

use super::handlers::{RunCommandHandler, ServeCommandHandler};
use super::parser::{Cli, Commands};
use crate::config::Settings;
use crate::error::AppResult;

/// Run the selected command; no subcommand is `run` over every category.
pub async fn execute_command(cli: &Cli, settings: Settings) -> AppResult<()> {
    for warning in warnings(cli, &settings) {
        eprintln!("Warning: {}", warning);
    }

    match &cli.command {
        None => RunCommandHandler::new(settings).execute(false, &[]).await,
        Some(Commands::Run {
            dry_run,
            categories,
        }) => {
            RunCommandHandler::new(settings)
                .execute(*dry_run, categories)
                .await
        }
        Some(Commands::Serve { dry_run, .. }) => {
            ServeCommandHandler::new(settings).execute(*dry_run).await
        }
    }
}

/// Legal but probably unintended combinations, printed before the command runs
fn warnings(cli: &Cli, settings: &Settings) -> Vec<String> {
    let mut warnings = Vec::new();

    if let Some(Commands::Run { categories, .. }) = &cli.command {
        for category in categories {
            if settings.webhooks.url_for(*category).is_none() {
                warnings.push(format!(
                    "category '{}' has no webhook ({} is unset) and will be skipped",
                    category,
                    category.webhook_env_var()
                ));
            }
        }
    }

    if let Some(Commands::Serve { .. }) = &cli.command
        && settings.server.port < 1024
    {
        warnings.push(format!(
            "port {} is privileged and may need elevated rights",
            settings.server.port
        ));
    }

    if !cli.is_dry_run() && settings.webhooks.enabled_categories().is_empty() {
        warnings.push("no webhook configured; nothing will be announced".to_string());
    }

    warnings
}
