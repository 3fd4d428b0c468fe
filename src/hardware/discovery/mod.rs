//! Drive Discovery Module
//!
//! Sources of drive data for the monitor: captured SMART tables replayed as
//! diagnostic sources, and the configured logical volumes of each drive.

pub mod capture;
pub mod volumes;

pub use capture::*;
pub use volumes::*;
