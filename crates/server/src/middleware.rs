//! Request timing.

use std::time::{Duration, Instant};

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Requests slower than this get a warning; nothing is aborted.
const SLOW_REQUEST_THRESHOLD: Duration = Duration::from_secs(3);

pub async fn time_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;

    let elapsed = started.elapsed();
    if elapsed > SLOW_REQUEST_THRESHOLD {
        tracing::warn!(
            %method,
            path,
            elapsed_ms = elapsed.as_millis() as u64,
            "slow request"
        );
    }
    response
}
