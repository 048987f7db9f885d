//! HTTP server setup.
//!
//! # Responsibilities
//! - Create the Axum router with all fixture routes
//! - Wire up the request-counting middleware
//! - Serve connections from a bound listener, one task per connection

use std::sync::atomic::AtomicU64;
use std::sync::Arc;

use axum::{middleware, routing::get, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::FixtureConfig;
use crate::http::counter::count_request;
use crate::http::handlers;

/// Shared state injected into handlers.
///
/// The request counter is the only mutable state in the process; atomic
/// increments keep it lossless under concurrent connections.
#[derive(Clone)]
pub struct AppState {
    pub server_id: Arc<str>,
    pub request_count: Arc<AtomicU64>,
}

/// HTTP server for the backend fixture.
pub struct FixtureServer {
    router: Router,
    config: FixtureConfig,
}

impl FixtureServer {
    /// Create a new fixture server with the given configuration.
    pub fn new(config: FixtureConfig) -> Self {
        let state = AppState {
            server_id: config.server_id.as_str().into(),
            request_count: Arc::new(AtomicU64::new(0)),
        };

        let router = Self::build_router(state);
        Self { router, config }
    }

    /// Build the Axum router.
    ///
    /// The catch-all fallback handles both generic `/api/` paths and the
    /// JSON 404, so dispatch order matches exact routes first, then prefix,
    /// then not-found. GET and POST are served identically on every route.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/health", get(handlers::health).post(handlers::health))
            .route("/api/echo", get(handlers::echo).post(handlers::echo))
            .route("/api/slow", get(handlers::slow).post(handlers::slow))
            .fallback(handlers::catch_all)
            .layer(middleware::from_fn_with_state(state.clone(), count_request))
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }

    /// Run the server, accepting connections on the given listener until the
    /// process is terminated. There is no graceful-shutdown protocol; test
    /// harnesses kill the process.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;

        tracing::info!(
            server_id = %self.config.server_id,
            port = addr.port(),
            "Backend fixture listening"
        );

        axum::serve(listener, self.router).await
    }
}
