//! Fixture configuration.
//!
//! # Responsibilities
//! - Read identity and port from the environment once at startup
//! - Apply documented defaults for absent values
//! - Reject a malformed port before anything binds
//!
//! # Design Decisions
//! - Configuration is an explicit struct handed to the server, not an
//!   ambient lookup repeated per request
//! - A malformed `PORT` is fatal: the process must never come up listening
//!   on a port the harness did not ask for

use std::net::SocketAddr;

use thiserror::Error;

/// Identity reported when `SERVER_ID` is unset.
pub const DEFAULT_SERVER_ID: &str = "unknown";

/// Listening port when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 8000;

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `PORT` was set but is not a positive integer in range.
    #[error("invalid PORT value {value:?}: must be a positive integer")]
    InvalidPort { value: String },
}

/// Startup configuration for one fixture instance.
#[derive(Debug, Clone)]
pub struct FixtureConfig {
    /// Identity distinguishing this instance from its peers in the fleet.
    pub server_id: String,

    /// TCP port to listen on, all interfaces.
    pub port: u16,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            server_id: DEFAULT_SERVER_ID.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl FixtureConfig {
    /// Load configuration from the `SERVER_ID` and `PORT` environment
    /// variables, falling back to defaults for absent values.
    pub fn from_env() -> Result<Self, ConfigError> {
        let server_id =
            std::env::var("SERVER_ID").unwrap_or_else(|_| DEFAULT_SERVER_ID.to_string());
        let port = match std::env::var("PORT") {
            Ok(raw) => parse_port(&raw)?,
            Err(_) => DEFAULT_PORT,
        };
        Ok(Self { server_id, port })
    }

    /// Address the listener binds to.
    pub fn bind_address(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

fn parse_port(raw: &str) -> Result<u16, ConfigError> {
    match raw.trim().parse::<u16>() {
        Ok(port) if port > 0 => Ok(port),
        _ => Err(ConfigError::InvalidPort {
            value: raw.to_string(),
        }),
    }
}
