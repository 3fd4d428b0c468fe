//! Device Classification Module
//!
//! Matches a drive against the ordered table of device profiles to pick the
//! SMART catalog and family behaviour used to decode it.

pub mod families;
pub mod family;
pub mod profile;

pub use family::*;
pub use profile::*;
