//! HTTP surface of the weather and air quality monitor.
//!
//! This crate focuses on:
//! - Serving the integration manifest and the tick endpoint
//! - Handing ticks to a background task
//! - Command-line flags and logging bootstrap

pub mod cli;
pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::AppState;
