//! Domain Ports - Core types and collaborator traits for the drive monitor
//!
//! These traits define the boundaries between SMART decoding and the
//! outside world: the device that produces raw SMART tables, the OS view of
//! its logical volumes, and the registry that consumes sensors.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

// =============================================================================
// Raw SMART Records
// =============================================================================

/// Length of the raw value field of a SMART attribute entry
pub const RAW_VALUE_LEN: usize = 6;

/// Identifier that terminates the valid part of an attribute table
pub const END_OF_ATTRIBUTES: u8 = 0x00;

/// One entry of the SMART attribute table as read from the device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawAttributeRecord {
    /// Attribute identifier
    pub identifier: u8,
    /// Vendor-specific raw value, little-endian
    pub raw_value: [u8; RAW_VALUE_LEN],
    /// Current normalized value
    pub current_value: u8,
    /// Worst normalized value seen
    pub worst_value: u8,
}

impl RawAttributeRecord {
    pub fn new(identifier: u8, raw_value: [u8; RAW_VALUE_LEN], current_value: u8, worst_value: u8) -> Self {
        Self {
            identifier,
            raw_value,
            current_value,
            worst_value,
        }
    }

    /// Whether this entry is the end-of-table marker
    #[inline]
    pub fn is_end_marker(&self) -> bool {
        self.identifier == END_OF_ATTRIBUTES
    }
}

/// One entry of the SMART threshold table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawThresholdRecord {
    /// Attribute identifier
    pub identifier: u8,
    /// Failure threshold for the normalized value
    pub threshold: u8,
}

// =============================================================================
// Sensor Types
// =============================================================================

/// Kind of physical quantity a sensor reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SensorType {
    Temperature,
    Load,
    Level,
    Data,
    Factor,
}

impl std::fmt::Display for SensorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SensorType::Temperature => write!(f, "temperature"),
            SensorType::Load => write!(f, "load"),
            SensorType::Level => write!(f, "level"),
            SensorType::Data => write!(f, "data"),
            SensorType::Factor => write!(f, "factor"),
        }
    }
}

/// Unique identifier for a sensor, `/hdd/{index}/{type}/{channel}`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SensorId(pub String);

impl SensorId {
    pub fn new(drive_index: u32, sensor_type: SensorType, channel: u32) -> Self {
        Self(format!("/hdd/{}/{}/{}", drive_index, sensor_type, channel))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SensorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SensorId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A user-adjustable sensor parameter with its current value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub description: String,
    pub default: f64,
    pub value: f64,
}

/// Everything a sensor registry needs to know about a new sensor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorDefinition {
    pub id: SensorId,
    pub name: String,
    pub sensor_type: SensorType,
    pub channel: u32,
    pub default_hidden: bool,
    pub parameters: Vec<Parameter>,
}

// =============================================================================
// Drive Identity
// =============================================================================

/// What the OS reports about a physical drive, independent of SMART
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriveIdentity {
    /// Physical drive index
    pub index: u32,
    /// OS-reported model name (may be empty)
    pub name: String,
    /// OS-reported firmware revision (may be empty)
    pub revision: String,
}

// =============================================================================
// Diagnostic Source Port
// =============================================================================

/// Port for issuing SMART commands to one device
///
/// Reads on an invalid or closed source return empty tables rather than
/// failing.
pub trait DiagnosticSource: Send {
    /// Whether the device answered the SMART capability probe
    fn is_valid(&self) -> bool;

    /// Read the model name and firmware revision, `None` on failure
    fn read_name_and_firmware(&self) -> Option<(String, String)>;

    /// Enable SMART operations on the device
    fn enable_diagnostics(&self) -> bool;

    /// Read the attribute table
    fn read_attribute_records(&self) -> Vec<RawAttributeRecord>;

    /// Read the threshold table
    fn read_threshold_records(&self) -> Vec<RawThresholdRecord>;

    /// Release the device handle. Must tolerate repeated calls.
    fn close(&mut self);
}

// =============================================================================
// Volume Probe Port
// =============================================================================

/// Port for the OS view of logical volumes on a physical drive
pub trait VolumeProbe {
    /// Labels of logical volumes on the drive with the given index
    fn logical_volumes(&self, drive_index: u32) -> Vec<String>;

    /// Total size of a logical volume in bytes
    fn volume_size(&self, volume: &str) -> Result<u64>;
}

// =============================================================================
// Sensor Registry Port
// =============================================================================

/// Port for the consumer of created sensors and their values
pub trait SensorRegistry: Send + Sync {
    /// Announce a newly created sensor
    fn register(&self, definition: &SensorDefinition);

    /// Push a new value for a registered sensor
    fn update(&self, id: &SensorId, value: f64);
}

// =============================================================================
// Type Aliases for Arc'd Traits
// =============================================================================

pub type SensorRegistryRef = Arc<dyn SensorRegistry>;
