//! SMART Decoding Module
//!
//! Raw value decoding, attribute descriptors and per-family attribute
//! catalogs.

pub mod attribute;
pub mod catalog;
pub mod names;
pub mod raw;

pub use attribute::*;
pub use catalog::*;
pub use raw::*;
