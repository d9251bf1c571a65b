use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::shared::api_error::ErrorBody;
use thiserror::Error;

/// Failures produced by the gateway itself.
///
/// Non-2xx answers of the upstream API are relayed as-is and never pass
/// through here.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
    #[error("{0}")]
    BadRequest(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

impl GatewayError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Upstream(e) if e.is_timeout() => StatusCode::GATEWAY_TIMEOUT,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{}", self);
        } else {
            tracing::warn!("{}", self);
        }
        (status, Json(ErrorBody::new(self.to_string()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            GatewayError::BadRequest("collection_id is required".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            GatewayError::Config("bad bind".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_bad_request_message_is_plain() {
        let err = GatewayError::BadRequest("collection_id is required".into());
        assert_eq!(err.to_string(), "collection_id is required");
    }
}
