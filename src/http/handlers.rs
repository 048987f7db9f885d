//! Route handlers.
//!
//! All handlers serve GET and POST identically; request bodies are ignored.
//! Response field names are part of the wire contract: load-balancer test
//! harnesses parse these shapes to verify distribution, so they must not
//! change.

use std::collections::HashMap;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use axum::{
    extract::{OriginalUri, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension, Json,
};
use serde::Serialize;

use crate::http::counter::RequestCount;
use crate::http::server::AppState;

/// Delay applied by `/api/slow` when the parameter is absent or invalid.
const DEFAULT_DELAY_SECS: f64 = 1.0;

#[derive(Serialize)]
pub struct HealthBody {
    pub status: &'static str,
    pub server_id: String,
}

#[derive(Serialize)]
pub struct EchoBody {
    pub server_id: String,
    pub request_count: u64,
    pub path: String,
    pub timestamp: f64,
}

#[derive(Serialize)]
pub struct SlowBody {
    pub server_id: String,
    pub delay: f64,
}

#[derive(Serialize)]
pub struct ApiBody {
    pub server_id: String,
    pub request_count: u64,
    pub path: String,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
}

/// Health probe. Increments the counter like every other route (the
/// middleware runs unconditionally) but does not report it.
pub async fn health(State(state): State<AppState>) -> Json<HealthBody> {
    Json(HealthBody {
        status: "healthy",
        server_id: state.server_id.to_string(),
    })
}

/// Echo endpoint: identity, counter, raw request path, and wall-clock time.
pub async fn echo(
    State(state): State<AppState>,
    Extension(RequestCount(count)): Extension<RequestCount>,
    OriginalUri(uri): OriginalUri,
) -> Json<EchoBody> {
    // `path` reproduces the raw request target, query string included.
    let path = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path())
        .to_string();

    Json(EchoBody {
        server_id: state.server_id.to_string(),
        request_count: count,
        path,
        timestamp: unix_timestamp(),
    })
}

/// Simulated latency for timeout testing. Sleeps this task only; concurrent
/// connections are unaffected. No cancellation: once started, the delay runs
/// to completion even if the client abandons the connection.
pub async fn slow(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<SlowBody> {
    let delay = params
        .get("delay")
        .map(|raw| parse_delay(raw))
        .unwrap_or(DEFAULT_DELAY_SECS);

    tokio::time::sleep(Duration::from_secs_f64(delay)).await;

    Json(SlowBody {
        server_id: state.server_id.to_string(),
        delay,
    })
}

/// Dispatch for everything outside the fixed routes: paths under `/api/`
/// get a generic 200 with counters, anything else the JSON 404.
pub async fn catch_all(
    State(state): State<AppState>,
    Extension(RequestCount(count)): Extension<RequestCount>,
    OriginalUri(uri): OriginalUri,
) -> Response {
    if uri.path().starts_with("/api/") {
        Json(ApiBody {
            server_id: state.server_id.to_string(),
            request_count: count,
            // query string deliberately dropped here, unlike /api/echo
            path: uri.path().to_string(),
        })
        .into_response()
    } else {
        (StatusCode::NOT_FOUND, Json(ErrorBody { error: "not found" })).into_response()
    }
}

/// Parse a `delay` query value in seconds, falling back to the default for
/// anything that is not a non-negative number of seconds a `Duration` can
/// represent.
fn parse_delay(raw: &str) -> f64 {
    raw.parse::<f64>()
        .ok()
        .filter(|secs| Duration::try_from_secs_f64(*secs).is_ok())
        .unwrap_or(DEFAULT_DELAY_SECS)
}

fn unix_timestamp() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs_f64()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_fractional_delay() {
        assert_eq!(parse_delay("0.2"), 0.2);
        assert_eq!(parse_delay("5"), 5.0);
        assert_eq!(parse_delay("0"), 0.0);
    }

    #[test]
    fn invalid_delay_falls_back_to_default() {
        assert_eq!(parse_delay("abc"), DEFAULT_DELAY_SECS);
        assert_eq!(parse_delay(""), DEFAULT_DELAY_SECS);
        assert_eq!(parse_delay("-1"), DEFAULT_DELAY_SECS);
        assert_eq!(parse_delay("NaN"), DEFAULT_DELAY_SECS);
        assert_eq!(parse_delay("inf"), DEFAULT_DELAY_SECS);
    }

    #[test]
    fn oversized_delay_falls_back_without_panicking() {
        // Finite and non-negative, but beyond what Duration can hold.
        assert_eq!(parse_delay("1e20"), DEFAULT_DELAY_SECS);
        assert_eq!(parse_delay("1.8e308"), DEFAULT_DELAY_SECS);
        // Every accepted value must survive the conversion in the handler.
        let _ = Duration::from_secs_f64(parse_delay("1e20"));
    }

    #[test]
    fn timestamp_is_past_2020() {
        assert!(unix_timestamp() > 1_577_836_800.0);
    }
}
