//! HTTP gateway for the Mergington High School activities service.
//!
//! Exposes the activity directory as a small JSON API and serves the
//! browser front end from `/static`.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod error;
pub mod routes;

pub use config::GatewayConfig;
pub use error::GatewayError;
pub use routes::{create_router, AppState};
