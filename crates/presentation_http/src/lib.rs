//! Cragcast HTTP presentation layer
//!
//! This crate provides the HTTP API for Cragcast.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use server::serve_with_drain_timeout;
pub use state::AppState;
