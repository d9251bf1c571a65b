use axum::body::Body;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, Method, Request};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use super::upstream::{is_event_stream, Upstream, FORWARDED_REQUEST_HEADERS, RELAYED_RESPONSE_HEADERS};
use crate::shared::error::GatewayError;

#[derive(Debug, Default, Deserialize)]
pub struct ListItemsQuery {
    pub collection_id: Option<String>,
}

/// The item list is always scoped to one collection
pub fn require_collection_id(query: &ListItemsQuery) -> Result<(), GatewayError> {
    match query.collection_id.as_deref().map(str::trim) {
        Some(id) if !id.is_empty() => Ok(()),
        _ => Err(GatewayError::BadRequest("collection_id is required".to_string())),
    }
}

/// GET /api/items
pub async fn list_items(
    State(upstream): State<Upstream>,
    query: Result<Query<ListItemsQuery>, QueryRejection>,
    req: Request<Body>,
) -> Result<Response, GatewayError> {
    let Query(query) = query.map_err(|e| GatewayError::BadRequest(e.body_text()))?;
    require_collection_id(&query)?;
    forward(State(upstream), req).await
}

/// Relays the request to the catalog API and streams the answer back.
///
/// Upstream error statuses are passed through with their body.
pub async fn forward(
    State(upstream): State<Upstream>,
    req: Request<Body>,
) -> Result<Response, GatewayError> {
    let (parts, body) = req.into_parts();
    let path_and_query = parts
        .uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| parts.uri.path());
    let url = upstream.url_for(path_and_query);
    let streaming = is_event_stream(parts.uri.path());

    let mut builder = upstream.client.request(parts.method.clone(), &url);
    for name in FORWARDED_REQUEST_HEADERS {
        if let Some(value) = parts.headers.get(&name) {
            builder = builder.header(name, value.clone());
        }
    }
    if !streaming {
        builder = builder.timeout(upstream.timeout);
    }
    if matches!(parts.method, Method::POST | Method::PUT | Method::PATCH) {
        builder = builder.body(reqwest::Body::wrap_stream(body.into_data_stream()));
    }

    tracing::debug!("{} {} -> {}", parts.method, parts.uri.path(), url);
    let answer = builder.send().await?;
    let status = answer.status();
    if !status.is_success() {
        tracing::warn!("Upstream answered {} for {} {}", status, parts.method, parts.uri.path());
    }

    let mut headers = HeaderMap::new();
    for name in RELAYED_RESPONSE_HEADERS {
        if let Some(value) = answer.headers().get(&name) {
            headers.insert(name, value.clone());
        }
    }

    Ok((status, headers, Body::from_stream(answer.bytes_stream())).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(uri: &str) -> ListItemsQuery {
        let uri: axum::http::Uri = uri.parse().unwrap();
        Query::<ListItemsQuery>::try_from_uri(&uri).unwrap().0
    }

    #[test]
    fn test_collection_id_required() {
        assert!(require_collection_id(&parse("/api/items?collection_id=4")).is_ok());
        assert!(require_collection_id(&parse("/api/items?limit=10&collection_id=4")).is_ok());
        assert!(matches!(
            require_collection_id(&parse("/api/items")),
            Err(GatewayError::BadRequest(_))
        ));
        assert!(require_collection_id(&parse("/api/items?collection_id=")).is_err());
        assert!(require_collection_id(&parse("/api/items?collection=4")).is_err());
    }

    #[test]
    fn test_collection_id_checked_after_decoding() {
        assert!(require_collection_id(&parse("/api/items?collection_id=%20")).is_err());
        assert!(require_collection_id(&parse("/api/items?collection_id=+")).is_err());
        assert!(require_collection_id(&parse("/api/items?collection%5Fid=4")).is_ok());
        assert_eq!(
            parse("/api/items?collection_id=%34%32").collection_id.as_deref(),
            Some("42")
        );
    }
}
