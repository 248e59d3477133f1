//! Delivery seam between the pipeline and a chat service.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::models::Category;

/// Message to be delivered for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationMessage {
    pub category: Category,
    /// Fully formatted message text
    pub content: String,
}

/// Receipt for an accepted message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationResult {
    /// Status the webhook answered with, when there was an HTTP exchange
    pub status_code: Option<u16>,
    pub duration_ms: u64,
}

/// Posts one category's message somewhere.
///
/// `Ok` means the receiver accepted the message. Anything else must be an
/// `Err`, so the pipeline leaves that category's last-seen titles alone.
#[async_trait]
pub trait NotificationProvider: Send + Sync {
    async fn send(&self, message: &NotificationMessage) -> AppResult<NotificationResult>;

    /// Short label for log fields
    fn name(&self) -> &'static str;
}
