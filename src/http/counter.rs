//! Per-request counting middleware.
//!
//! The counter increments exactly once for every request before route
//! dispatch, including `/health` and unmatched paths. Handlers that report
//! the count read the value produced by their own increment from request
//! extensions rather than re-loading the shared atomic, so a concurrent
//! request cannot shift the number between increment and response.

use std::sync::atomic::Ordering;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::http::server::AppState;

/// Post-increment counter value for the current request.
#[derive(Debug, Clone, Copy)]
pub struct RequestCount(pub u64);

/// Middleware that increments the shared counter and records this request's
/// count in its extensions.
pub async fn count_request(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let count = state.request_count.fetch_add(1, Ordering::Relaxed) + 1;
    request.extensions_mut().insert(RequestCount(count));
    next.run(request).await
}
