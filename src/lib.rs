//! SMART Drive Monitor
//!
//! Identifies ATA storage devices from their SMART data and turns the raw
//! vendor attribute records into typed sensors (temperature, remaining life,
//! host writes, write amplification) for a hardware-monitoring system.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────────┐
//! │                              Monitor                                 │
//! │                 (periodic tick over every open drive)                │
//! ├──────────────────────────────────────────────────────────────────────┤
//! │                          Storage Device                              │
//! │    open / classify ─► create sensors ─► update sensors ─► dispose    │
//! ├───────────────────────┬──────────────────────┬───────────────────────┤
//! │   Profile Registry    │  Attribute Catalog   │   Family Behaviour    │
//! │ (first match wins)    │  (per device family) │  (derived sensors)    │
//! ├───────────────────────┴──────────────────────┴───────────────────────┤
//! │                       Raw Record Decoder                             │
//! ├──────────────────────────────────────────────────────────────────────┤
//! │   Diagnostic Source (capture)   │     Sensor Registry (in-memory)    │
//! └─────────────────────────────────┴────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`hardware`]: SMART decoding, classification, drives and sensors
//! - [`monitor`]: Periodic refresh of open drives
//! - [`config`]: YAML configuration
//! - [`domain`]: Core domain types and collaborator ports
//! - [`error`]: Error types and handling

pub mod config;
pub mod domain;
pub mod error;
pub mod hardware;
pub mod monitor;

// Re-export commonly used types
pub use config::{DeviceConfig, MonitorConfig, ParameterOverrides, VolumeConfig};

pub use domain::ports::{
    DiagnosticSource, DriveIdentity, RawAttributeRecord, RawThresholdRecord, SensorDefinition,
    SensorId, SensorRegistry, SensorRegistryRef, SensorType, VolumeProbe,
};

pub use error::{Error, ErrorAction, Result};

pub use hardware::{
    decode_signed, decode_unsigned32, AttributeCatalog, CaptureSource, ConfiguredVolumes, Conversion,
    DeviceProfile, DeviceState, FamilyBehavior, InMemorySensorRegistry, ProfileRegistry, SmartAttribute,
    StorageDevice,
};

pub use monitor::Monitor;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
