//! Service layer: message formatting, delivery and the deal pipeline.

mod deal_service;
pub mod formatter;
pub mod notifications;

pub use deal_service::{CategoryOutcome, DealService, RunSummary};
