use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use log::info;

/// Log method, path, status and latency of every request.
///
/// Only the path is logged. Bodies and query strings never reach the log.
pub async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;

    info!(
        "{} {} {} {:.2?}",
        method,
        path,
        response.status().as_u16(),
        started.elapsed()
    );

    response
}
