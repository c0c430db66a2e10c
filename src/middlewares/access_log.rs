use std::{
    convert::Infallible,
    time::Instant,
};
use axum::{
    body::Body,
    http::Request,
    middleware::Next,
    response::Response,
};
use tracing::info;

/// Logs one line per request: method, path, response status, and elapsed
/// time. The start `Instant` comes from `start_time_middleware` via the
/// request extensions; if it's missing we fall back to "now()".
pub async fn access_log_middleware(
    req: Request<Body>,
    next: Next,
) -> Result<Response, Infallible> {
    let start_time: Instant = req
        .extensions()
        .get::<Instant>()
        .copied()
        .unwrap_or_else(Instant::now);

    let method = req.method().clone();
    let path: String = req.uri().path().to_owned();

    // Call the inner handler
    let response: Response = next.run(req).await;

    let duration_ms: u128 = start_time.elapsed().as_millis();

    info!(
        "{} {} -> {} ({} ms)",
        method,
        path,
        response.status(),
        duration_ms,
    );

    Ok(response)
}
