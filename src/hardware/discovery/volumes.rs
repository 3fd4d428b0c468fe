//! Configured Logical Volumes
//!
//! Volume probe answering from the volumes listed for each drive in the
//! monitor configuration.

use crate::config::{MonitorConfig, VolumeConfig};
use crate::domain::ports::VolumeProbe;
use crate::error::{Error, Result};
use indexmap::IndexMap;

/// Volume table keyed by drive index, labels in configuration order
#[derive(Debug, Clone, Default)]
pub struct ConfiguredVolumes {
    drives: IndexMap<u32, Vec<VolumeConfig>>,
}

impl ConfiguredVolumes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect the volumes of every configured device
    pub fn from_config(config: &MonitorConfig) -> Self {
        let mut volumes = Self::new();
        for (position, device) in config.devices.iter().enumerate() {
            volumes.insert(config.device_index(position), device.volumes.clone());
        }
        volumes
    }

    pub fn insert(&mut self, drive_index: u32, volumes: Vec<VolumeConfig>) {
        self.drives.insert(drive_index, volumes);
    }
}

impl VolumeProbe for ConfiguredVolumes {
    fn logical_volumes(&self, drive_index: u32) -> Vec<String> {
        self.drives
            .get(&drive_index)
            .map(|volumes| volumes.iter().map(|v| v.label.clone()).collect())
            .unwrap_or_default()
    }

    fn volume_size(&self, volume: &str) -> Result<u64> {
        self.drives
            .values()
            .flatten()
            .find(|v| v.label == volume)
            .map(|v| v.size_bytes)
            .ok_or_else(|| Error::VolumeAccess {
                volume: volume.to_string(),
                reason: "volume is not configured".to_string(),
            })
    }
}
