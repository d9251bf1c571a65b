//! API utilities for frontend-gateway communication
//!
//! The gateway serves the frontend and proxies `/api/*`, so every request goes
//! to the page origin.

use contracts::domain::common::AggregateId;
use contracts::shared::api_error::ErrorBody;
use gloo_net::http::Response;

/// Origin of the current page, e.g. "https://catalog.example.com"
///
/// Empty when no window is available, which yields relative URLs.
pub fn api_base() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

/// ```rust,ignore
/// let url = api_url("/api/collections");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Id as a percent-encoded path segment
pub fn id_segment(id: &impl AggregateId) -> String {
    urlencoding::encode(&id.as_string()).into_owned()
}

/// Message for a non-2xx response: the body's `detail`/`error`, else the status
pub fn error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message())
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| format!("HTTP {}", status))
}

/// `Err("Failed to {action}: ...")` unless the response is 2xx
pub async fn ensure_ok(response: Response, action: &str) -> Result<Response, String> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let message = format!("Failed to {}: {}", action, error_message(status, &body));
    log::error!("{}", message);
    Err(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_prefers_body() {
        assert_eq!(
            error_message(400, r#"{"detail":"collection_id is required"}"#),
            "collection_id is required"
        );
        assert_eq!(error_message(502, r#"{"error":"upstream unreachable"}"#), "upstream unreachable");
    }

    #[test]
    fn test_id_segment_encodes() {
        use contracts::domain::a002_item::ItemId;
        assert_eq!(id_segment(&ItemId::new("a/b c")), "a%2Fb%20c");
        assert_eq!(id_segment(&contracts::domain::a001_collection::CollectionId::new(7)), "7");
    }

    #[test]
    fn test_error_message_falls_back_to_status() {
        assert_eq!(error_message(500, "<html>oops</html>"), "HTTP 500");
        assert_eq!(error_message(404, r#"{"detail":""}"#), "HTTP 404");
    }
}
