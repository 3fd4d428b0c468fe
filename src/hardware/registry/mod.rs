//! Sensor Registry Module
//!
//! In-memory consumer of created sensors and their readings, with an event
//! stream for subscribers.

pub mod events;
pub mod sensor_registry;

pub use events::*;
pub use sensor_registry::*;
