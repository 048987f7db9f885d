//! Backend fixture server.
//!
//! A deliberately simple HTTP backend for load-balancer integration tests.
//! Each instance reports its configured identity on every route so a test
//! harness can observe which backend served a request.
//!
//! ```text
//!                    ┌──────────────────────────────────────┐
//!                    │           BACKEND FIXTURE            │
//!                    │                                      │
//!   Harness request  │  ┌─────────┐   ┌────────┐   ┌─────┐  │
//!   ─────────────────┼─▶│ counter │──▶│ route  │──▶│JSON │──┼──▶ response
//!                    │  │ layer   │   │dispatch│   │body │  │
//!                    │  └─────────┘   └────────┘   └─────┘  │
//!                    │                                      │
//!                    │  config (SERVER_ID, PORT) · tracing  │
//!                    └──────────────────────────────────────┘
//! ```
//!
//! Routes: `/health`, `/api/echo`, `/api/slow?delay=N`, generic `/api/*`,
//! JSON 404 for everything else. GET and POST are treated identically.

use tokio::net::TcpListener;

use backend_fixture::config::FixtureConfig;
use backend_fixture::http::FixtureServer;
use backend_fixture::observability;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    observability::init_tracing();

    // Malformed PORT aborts here, before anything binds.
    let config = FixtureConfig::from_env()?;

    let listener = TcpListener::bind(config.bind_address()).await?;

    let server = FixtureServer::new(config);
    server.run(listener).await?;

    Ok(())
}
