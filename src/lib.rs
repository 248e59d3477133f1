//! deal-notifier library
//!
//! Fetches discounted game deals, sorts them into categories and announces
//! changes to per-category webhooks.

use shadow_rs::shadow;
shadow!(build);

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod external;
pub mod filters;
pub mod jobs;
pub mod logger;
pub mod models;
pub mod server;
pub mod services;
pub mod state;
pub mod store;

#[cfg(test)]
pub(crate) mod test_support;

pub use state::AppState;

pub fn pkg_version() -> &'static str {
    build::PKG_VERSION
}

pub fn clap_long_version() -> &'static str {
    build::CLAP_LONG_VERSION
}
