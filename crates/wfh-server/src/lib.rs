//! REST server for the WFH Toolkit.
//!
//! Exposes the auth and progress endpoints consumed by the web client:
//! signup/login/logout/me over an http-only cookie token, and per-user
//! 21-day progress snapshots. All storage is behind the wfh-core store
//! traits; the binary wires in the in-memory implementation.

pub mod auth;
pub mod error;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::router;
pub use state::{AppState, ServerConfig};
