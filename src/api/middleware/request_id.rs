//! `x-request-id` correlation.
//!
//! A caller-supplied, non-blank ID is kept; otherwise a UUID v4 is minted.
//! Either way the ID is placed in the request extensions as [`RequestId`]
//! and copied onto the response.

use axum::extract::Request;
use axum::http::{HeaderMap, HeaderName, HeaderValue};
use axum::middleware::Next;
use axum::response::Response;
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

#[derive(Clone, Debug)]
pub struct RequestId(pub String);

fn incoming_id(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(REQUEST_ID_HEADER)?.to_str().ok()?.trim();
    (!value.is_empty()).then(|| value.to_string())
}

pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let id = incoming_id(request.headers()).unwrap_or_else(|| Uuid::new_v4().to_string());
    request.extensions_mut().insert(RequestId(id.clone()));

    let mut response = next.run(request).await;
    if let Ok(value) = HeaderValue::from_str(&id) {
        response
            .headers_mut()
            .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::spawn_server;
    use axum::{Extension, Router, middleware, routing::get};

    async fn echo(Extension(RequestId(id)): Extension<RequestId>) -> String {
        id
    }

    async fn get_with(header: Option<&str>) -> (String, String) {
        let router = Router::new()
            .route("/", get(echo))
            .layer(middleware::from_fn(request_id_middleware));
        let addr = spawn_server(router).await;

        let mut request = reqwest::Client::new().get(format!("http://{}/", addr));
        if let Some(value) = header {
            request = request.header(REQUEST_ID_HEADER, value);
        }
        let resp = request.send().await.unwrap();
        let echoed_header = resp.headers()[REQUEST_ID_HEADER].to_str().unwrap().to_string();
        (echoed_header, resp.text().await.unwrap())
    }

    #[tokio::test]
    async fn test_missing_or_blank_id_is_generated() {
        for header in [None, Some("   ")] {
            let (echoed, seen_by_handler) = get_with(header).await;
            assert!(Uuid::parse_str(&echoed).is_ok(), "{header:?}");
            assert_eq!(seen_by_handler, echoed);
        }
    }

    #[tokio::test]
    async fn test_caller_id_is_kept() {
        let (echoed, seen_by_handler) = get_with(Some("abc-123")).await;
        assert_eq!(echoed, "abc-123");
        assert_eq!(seen_by_handler, "abc-123");
    }
}
