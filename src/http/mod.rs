//! HTTP handling for the fixture.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, task per connection)
//!     → counter.rs (increment shared request counter, always)
//!     → handlers.rs (route-specific JSON responses)
//! ```

pub mod counter;
pub mod handlers;
pub mod server;

pub use counter::RequestCount;
pub use server::{AppState, FixtureServer};
