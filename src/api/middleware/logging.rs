//! Per-request log lines inside an `http_request` span.

use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use tracing::Instrument;

use super::RequestId;

/// Logs arrival and completion of every request.
///
/// Health checks arrive every few seconds, so `/` and `/health*` are
/// logged at debug instead of info.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let request_id = request
        .extensions()
        .get::<RequestId>()
        .map_or_else(|| "unknown".to_string(), |RequestId(id)| id.clone());

    let span = tracing::info_span!("http_request", %method, uri = %request.uri(), %request_id);
    let routine = is_health_check(&path);

    async move {
        if routine {
            tracing::debug!(%method, %path, "Request received");
        } else {
            tracing::info!(%method, %path, "Request received");
        }

        let started = Instant::now();
        let response = next.run(request).await;
        let status = response.status().as_u16();
        let duration_ms = started.elapsed().as_millis();

        if routine {
            tracing::debug!(status, duration_ms, "Response sent");
        } else {
            tracing::info!(status, duration_ms, "Response sent");
        }
        response
    }
    .instrument(span)
    .await
}

fn is_health_check(path: &str) -> bool {
    path == "/" || path == "/health" || path.starts_with("/health/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_check_paths() {
        for path in ["/", "/health", "/health/live"] {
            assert!(is_health_check(path), "{path}");
        }
        for path in ["/other", "/healthz", "/api/health"] {
            assert!(!is_health_check(path), "{path}");
        }
    }
}
