//! Application layer - Use cases and orchestration
//!
//! Contains the forecast engine (layer merging, hourly sequencing, daily
//! reduction), the ports it talks to the outside world through, and the
//! service that wires them together per request.

pub mod error;
pub mod forecast;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use forecast::{build_cragcast, merge_layers, reduce_days, sequence_hours};
pub use ports::*;
pub use services::*;
