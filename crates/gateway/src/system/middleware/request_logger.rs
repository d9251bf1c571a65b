use axum::body::Body;
use axum::http::{header, Request};
use axum::middleware::Next;
use axum::response::Response;
use chrono::Local;

use crate::shared::format::format_size;

/// Prints one line per request: time, duration, size, status, method, path.
///
/// The body is never read here, so event streams pass through untouched;
/// the size comes from `Content-Length` when the response has one.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    let size = response
        .headers()
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok());
    let status = response.status().as_u16();

    // cyan for success, brown for the rest
    let color_code = if response.status().is_success() { "36" } else { "33" };

    println!(
        "\x1b[{}m{}\x1b[0m | {:>5}ms | {:>12} | {} {:>6} {}",
        color_code,
        Local::now().format("%H:%M:%S"),
        start.elapsed().as_millis(),
        format_size(size),
        status,
        method,
        path
    );
    tracing::debug!(%method, %path, status, "request served");

    response
}
