//! Storage Device Module
//!
//! Per-drive orchestration: opening and classifying a drive, creating and
//! refreshing its sensors, rendering its SMART report, and releasing its
//! diagnostic source.

pub mod report;
pub mod sensor;
pub mod source;
pub mod storage;

#[cfg(test)]
pub(crate) mod testing;

pub use report::build_report;
pub use sensor::{AdditionalSensors, Sensor, SensorBindings};
pub use source::SourceGuard;
pub use storage::{DeviceState, StorageDevice, GENERIC_DRIVE_NAME, UNKNOWN_FIRMWARE};
