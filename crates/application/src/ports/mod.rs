//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod crag_location_port;
mod gridpoint_port;

#[cfg(test)]
pub use crag_location_port::MockCragLocationPort;
pub use crag_location_port::CragLocationPort;
#[cfg(test)]
pub use gridpoint_port::MockGridpointPort;
pub use gridpoint_port::GridpointPort;
