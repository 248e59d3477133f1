//! Webhook notification provider implementation.
//!
//! Sends the message as a single-field JSON object to the category's
//! webhook URL using the global HTTP_CLIENT.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use serde_json::{Map, Value};

use super::provider::{NotificationMessage, NotificationProvider, NotificationResult};
use crate::config::settings::NotifierConfig;
use crate::error::{AppError, AppResult};
use crate::external::client::HTTP_CLIENT;
use crate::models::Category;

/// Webhook notification provider
///
/// # Example
/// ```ignore
/// let provider = WebhookProvider::new(
///     Category::Unter15,
///     "https://discord.com/api/webhooks/...",
///     &NotifierConfig::default(),
/// );
/// provider.send(&message).await?;
/// ```
pub struct WebhookProvider {
    category: Category,
    url: String,
    payload_field: String,
    timeout: Duration,
}

impl WebhookProvider {
    pub fn new(category: Category, url: impl Into<String>, config: &NotifierConfig) -> Self {
        Self {
            category,
            url: url.into(),
            payload_field: config.payload_field.clone(),
            timeout: Duration::from_secs(config.timeout_seconds),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// JSON body: `{"<payload_field>": content}`
    fn payload(&self, message: &NotificationMessage) -> Value {
        let mut body = Map::new();
        body.insert(
            self.payload_field.clone(),
            Value::String(message.content.clone()),
        );
        Value::Object(body)
    }

    fn make_error(&self, message: impl Into<String>, source: Option<anyhow::Error>) -> AppError {
        AppError::Delivery {
            category: self.category.to_string(),
            message: message.into(),
            source,
        }
    }
}

#[async_trait]
impl NotificationProvider for WebhookProvider {
    /// POSTs the message; transport errors and non-2xx statuses are failures.
    async fn send(&self, message: &NotificationMessage) -> AppResult<NotificationResult> {
        let start = Instant::now();

        let response = HTTP_CLIENT
            .post(&self.url)
            .timeout(self.timeout)
            .json(&self.payload(message))
            .send()
            .await
            .map_err(|e: reqwest::Error| {
                self.make_error(format!("request failed: {}", e), Some(e.into()))
            })?;

        let status = response.status();
        let duration_ms = start.elapsed().as_millis() as u64;

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(self.make_error(format!("HTTP {}: {}", status, body.trim()), None));
        }

        tracing::debug!(
            category = %self.category,
            status = status.as_u16(),
            duration_ms,
            "Webhook accepted notification"
        );

        Ok(NotificationResult {
            status_code: Some(status.as_u16()),
            duration_ms,
        })
    }

    fn name(&self) -> &'static str {
        "webhook"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::spawn_server;
    use axum::extract::State;
    use axum::http::StatusCode;
    use axum::routing::post;
    use axum::{Json, Router};
    use std::sync::{Arc, Mutex};

    type Received = Arc<Mutex<Vec<Value>>>;

    async fn record(State(received): State<Received>, Json(body): Json<Value>) -> StatusCode {
        received.lock().unwrap().push(body);
        StatusCode::NO_CONTENT
    }

    fn message(content: &str) -> NotificationMessage {
        NotificationMessage {
            category: Category::Unter15,
            content: content.to_string(),
        }
    }

    #[tokio::test]
    async fn test_send_posts_content_field() {
        let received: Received = Arc::default();
        let router = Router::new()
            .route("/hook", post(record))
            .with_state(received.clone());
        let addr = spawn_server(router).await;

        let provider = WebhookProvider::new(
            Category::Unter15,
            format!("http://{}/hook", addr),
            &NotifierConfig::default(),
        );
        let result = provider.send(&message("hello")).await.unwrap();

        assert_eq!(result.status_code, Some(204));
        let received = received.lock().unwrap();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0], serde_json::json!({ "content": "hello" }));
    }

    #[tokio::test]
    async fn test_send_uses_configured_payload_field() {
        let received: Received = Arc::default();
        let router = Router::new()
            .route("/hook", post(record))
            .with_state(received.clone());
        let addr = spawn_server(router).await;

        let config = NotifierConfig {
            payload_field: "text".to_string(),
            ..Default::default()
        };
        let provider =
            WebhookProvider::new(Category::Epic, format!("http://{}/hook", addr), &config);
        provider.send(&message("slack")).await.unwrap();

        assert_eq!(
            received.lock().unwrap()[0],
            serde_json::json!({ "text": "slack" })
        );
    }

    #[tokio::test]
    async fn test_send_error_status_is_delivery_error() {
        let router = Router::new().route(
            "/hook",
            post(|| async { (StatusCode::BAD_REQUEST, "bad payload") }),
        );
        let addr = spawn_server(router).await;

        let provider = WebhookProvider::new(
            Category::All,
            format!("http://{}/hook", addr),
            &NotifierConfig::default(),
        );
        let err = provider.send(&message("x")).await.unwrap_err();

        match err {
            AppError::Delivery {
                category, message, ..
            } => {
                assert_eq!(category, "all");
                assert!(message.contains("400"));
                assert!(message.contains("bad payload"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_send_unreachable_is_delivery_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let provider = WebhookProvider::new(
            Category::All,
            format!("http://{}/hook", addr),
            &NotifierConfig::default(),
        );
        assert!(matches!(
            provider.send(&message("x")).await,
            Err(AppError::Delivery { .. })
        ));
    }
}
