//! Shared utilities for fixture integration tests.

use std::net::SocketAddr;

use tokio::net::TcpListener;

use backend_fixture::config::FixtureConfig;
use backend_fixture::http::FixtureServer;

/// Start a fixture on an ephemeral local port and return its address.
pub async fn start_fixture(server_id: &str) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let config = FixtureConfig {
        server_id: server_id.to_string(),
        port: addr.port(),
    };
    let server = FixtureServer::new(config);

    tokio::spawn(async move {
        let _ = server.run(listener).await;
    });

    addr
}

/// Non-pooled client so each request opens its own connection.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
