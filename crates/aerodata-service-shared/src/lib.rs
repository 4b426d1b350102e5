//! Shared infrastructure for aerodata HTTP microservices.
//!
//! This crate provides the HTTP glue used by the service containers:
//!
//! - [`AppState`]: shared Data API client for axum handlers
//! - [`ApiError`]: the canonical `{error, message[, detail]}` envelope as
//!   an axum response
//! - [`logging`]: structured JSON/text logging setup
//! - [`health`]: liveness/readiness probe handlers
//!
//! The services follow a thin-handler pattern: all Data API logic lives
//! in `aerodata-lib`, and handlers only parse parameters, call the
//! client, and format responses.

#![deny(warnings)]

mod error;
mod health;
pub mod logging;
mod state;

pub use error::ApiError;
pub use health::{health_live, health_ready, HealthStatus};
pub use logging::{init_logging, LogFormat, LoggingConfig};
pub use state::AppState;
