//! The one `reqwest::Client` shared by the deal fetcher and every webhook
//! provider.

use std::sync::LazyLock;
use std::time::Duration;

pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Built on first use. Callers set their own per-request timeout from the
/// settings; the 30 s here only bounds requests that do not.
pub static HTTP_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    build_client().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "HTTP client setup failed, using reqwest defaults");
        reqwest::Client::new()
    })
});

fn build_client() -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        // One upstream host plus at most four webhook hosts
        .pool_max_idle_per_host(4)
        .pool_idle_timeout(Duration::from_secs(90))
        .http2_adaptive_window(true)
        .gzip(true)
        .brotli(true)
        .zstd(true)
        .deflate(true)
        .build()
}
