//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber
//! - Keep per-request logging off by default so fixture output does not
//!   flood the test harness; `RUST_LOG` overrides the filter

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing with an env-overridable filter.
///
/// The default filter emits only the fixture's own info-level events (the
/// single startup line); `tower_http` request traces stay at debug and are
/// suppressed unless explicitly enabled.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "backend_fixture=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
