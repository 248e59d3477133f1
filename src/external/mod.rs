//! Outbound HTTP: the shared client and the upstream deal listing.

pub mod client;
pub mod deals;

pub use deals::{CheapSharkClient, DealProvider};
