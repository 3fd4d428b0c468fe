//! Domain layer - Core record types and port definitions
//!
//! This module defines the raw SMART record types and the traits (ports)
//! that device, volume and sensor adapters implement.

pub mod ports;

pub use ports::*;
