use std::time::Duration;

use axum::http::{header, HeaderName};

use crate::shared::config::UpstreamConfig;
use crate::shared::error::GatewayError;

/// Request headers copied to the upstream call
pub const FORWARDED_REQUEST_HEADERS: [HeaderName; 4] = [
    header::AUTHORIZATION,
    header::CONTENT_TYPE,
    header::CONTENT_LENGTH,
    header::ACCEPT,
];

/// Upstream response headers relayed to the browser
pub const RELAYED_RESPONSE_HEADERS: [HeaderName; 4] = [
    header::CONTENT_TYPE,
    header::CONTENT_LENGTH,
    header::CACHE_CONTROL,
    header::CONTENT_DISPOSITION,
];

/// Client of the remote catalog API
#[derive(Clone)]
pub struct Upstream {
    pub client: reqwest::Client,
    pub base_url: String,
    pub timeout: Duration,
}

impl Upstream {
    pub fn new(config: &UpstreamConfig) -> Result<Self, GatewayError> {
        let timeout = Duration::from_secs(config.timeout_secs);
        let client = reqwest::Client::builder()
            .connect_timeout(timeout)
            .build()?;
        let base_url = config.api_url.trim().trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(GatewayError::Config(format!(
                "upstream api_url must be an http(s) URL, got '{}'",
                config.api_url
            )));
        }
        Ok(Self {
            client,
            base_url,
            timeout,
        })
    }

    pub fn url_for(&self, path_and_query: &str) -> String {
        upstream_url(&self.base_url, path_and_query)
    }
}

/// `base` + the request path and query, with exactly one slash between them
pub fn upstream_url(base: &str, path_and_query: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path_and_query.trim_start_matches('/')
    )
}

/// Event-stream endpoints run for as long as the import takes, so they get
/// no overall timeout
pub fn is_event_stream(path: &str) -> bool {
    path.ends_with("-stream")
}
