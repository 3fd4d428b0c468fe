//! Hardware Module
//!
//! SMART decoding, drive classification, per-drive sensor orchestration,
//! capture-backed drive sources and the sensor registry.

pub mod smart;
pub mod classification;
pub mod device;
pub mod discovery;
pub mod registry;

pub use smart::*;
pub use classification::*;
pub use device::*;
pub use discovery::*;
pub use registry::*;
