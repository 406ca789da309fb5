use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::{info, warn};

pub async fn log_request(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();
    let started = Instant::now();

    let response = next.run(req).await;

    let status = response.status().as_u16();
    let content_length = response
        .headers()
        .get(axum::http::header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(0);
    let elapsed_ms = started.elapsed().as_millis() as u64;

    if response.status().is_server_error() {
        warn!(
            method = %method,
            url = %uri,
            status = status,
            length = content_length,
            elapsed_ms = elapsed_ms,
            "HTTP request failed"
        );
    } else {
        info!(
            method = %method,
            url = %uri,
            status = status,
            length = content_length,
            elapsed_ms = elapsed_ms,
            "HTTP request"
        );
    }

    response
}
