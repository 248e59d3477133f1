//! Notification delivery with pluggable providers.
//!
//! `NotificationProvider` is the seam the pipeline talks to; the webhook
//! provider is the only production implementation.

mod provider;
mod webhook_provider;

pub use provider::{NotificationMessage, NotificationProvider, NotificationResult};
pub use webhook_provider::WebhookProvider;
