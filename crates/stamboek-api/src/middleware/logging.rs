//! Request/response logging middleware.

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use std::time::Instant;

/// Logs one line per request with method, path, status, and latency.
///
/// Redirect responses also log their target, since the authorization
/// surfaces of this application are redirects.
pub async fn request_logging(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    let response = next.run(request).await;

    let status = response.status();
    let location = response
        .headers()
        .get(axum::http::header::LOCATION)
        .and_then(|v| v.to_str().ok());

    match location {
        Some(target) if status.is_redirection() => tracing::info!(
            %method,
            path,
            status = status.as_u16(),
            target,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "HTTP request"
        ),
        _ => tracing::info!(
            %method,
            path,
            status = status.as_u16(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "HTTP request"
        ),
    }

    response
}
