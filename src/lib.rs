//! Backend fixture for load-balancer integration tests.
//!
//! Each instance answers a small fixed set of routes with JSON bodies naming
//! its configured `server_id`, so an external reverse proxy or load balancer
//! under test can be checked for request distribution and timeout behavior.
//!
//! # Data Flow
//! ```text
//! request → counter middleware → route dispatch → JSON response
//! ```
//!
//! Deliberately a fixture, not a service: no routing logic of its own, no
//! health orchestration, no TLS, no persistence.

pub mod config;
pub mod http;
pub mod observability;

pub use config::FixtureConfig;
pub use http::FixtureServer;
