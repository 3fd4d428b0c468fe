//! Monitor Configuration
//!
//! YAML configuration for the drive monitor: which captured drives to load,
//! how often to refresh sensors, and per-sensor parameter overrides.
//!
//! ```yaml
//! poll_interval_secs: 2
//! report_on_exit: true
//! devices:
//!   - capture: /var/lib/smart/sda.json
//!     volumes:
//!       - { label: "C", size_bytes: 256060514304 }
//! sensor_parameters:
//!   /hdd/0/temperature/0: [-2.0]
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Parameter values keyed by sensor identifier
pub type ParameterOverrides = BTreeMap<String, Vec<f64>>;

// =============================================================================
// Device Configuration
// =============================================================================

/// A logical volume reported by the OS for a drive
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolumeConfig {
    /// Volume label, e.g. a drive letter
    pub label: String,
    /// Total size in bytes
    #[serde(default)]
    pub size_bytes: u64,
}

/// One monitored drive
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceConfig {
    /// Path to the JSON capture of the drive's SMART tables
    pub capture: PathBuf,
    /// Physical drive index (defaults to the position in the list)
    #[serde(default)]
    pub index: Option<u32>,
    /// OS-reported model name
    #[serde(default)]
    pub name: Option<String>,
    /// OS-reported firmware revision
    #[serde(default)]
    pub revision: Option<String>,
    /// Logical volumes on the drive
    #[serde(default)]
    pub volumes: Vec<VolumeConfig>,
}

impl DeviceConfig {
    pub fn from_capture(capture: impl Into<PathBuf>) -> Self {
        Self {
            capture: capture.into(),
            index: None,
            name: None,
            revision: None,
            volumes: Vec::new(),
        }
    }
}

// =============================================================================
// Monitor Configuration
// =============================================================================

/// Top-level monitor configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// Sensor refresh period in seconds
    pub poll_interval_secs: u64,
    /// Drives to monitor
    pub devices: Vec<DeviceConfig>,
    /// Per-sensor parameter overrides
    pub sensor_parameters: ParameterOverrides,
    /// Print the SMART report of every drive on shutdown
    pub report_on_exit: bool,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            poll_interval_secs: 1,
            devices: Vec::new(),
            sensor_parameters: ParameterOverrides::new(),
            report_on_exit: false,
        }
    }
}

impl MonitorConfig {
    /// Load and validate a YAML configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml_str(&contents)
    }

    /// Parse and validate a YAML document
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges, device index and volume label uniqueness
    pub fn validate(&self) -> Result<()> {
        if self.poll_interval_secs == 0 {
            return Err(Error::Configuration(
                "poll_interval_secs must be greater than zero".to_string(),
            ));
        }

        let mut seen = std::collections::BTreeSet::new();
        for (position, _) in self.devices.iter().enumerate() {
            let index = self.device_index(position);
            if !seen.insert(index) {
                return Err(Error::Configuration(format!(
                    "drive index {} is used by more than one device",
                    index
                )));
            }
        }

        // Volume labels name a volume system-wide, like drive letters
        let mut labels = std::collections::BTreeSet::new();
        for volume in self.devices.iter().flat_map(|d| &d.volumes) {
            if !labels.insert(volume.label.as_str()) {
                return Err(Error::Configuration(format!(
                    "volume label {} is listed more than once",
                    volume.label
                )));
            }
        }

        for (sensor, values) in &self.sensor_parameters {
            if values.iter().any(|v| !v.is_finite()) {
                return Err(Error::Configuration(format!(
                    "parameter override for {} is not a finite number",
                    sensor
                )));
            }
        }

        Ok(())
    }

    /// Effective drive index of the device at a list position
    pub fn device_index(&self, position: usize) -> u32 {
        self.devices
            .get(position)
            .and_then(|d| d.index)
            .unwrap_or(position as u32)
    }

    pub fn poll_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.poll_interval_secs)
    }
}
