//! Test doubles for device-level tests

use crate::domain::ports::{DiagnosticSource, RawAttributeRecord, RawThresholdRecord, VolumeProbe};
use crate::error::{Error, Result};
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::sync::Arc;

#[derive(Debug, Default)]
struct Script {
    valid: bool,
    identity: Option<(String, String)>,
    diagnostics_enabled: bool,
    attributes: Vec<RawAttributeRecord>,
    thresholds: Vec<RawThresholdRecord>,
    closes: usize,
}

/// In-memory diagnostic source whose tables can be changed between reads
pub struct ScriptedSource {
    script: Arc<Mutex<Script>>,
}

/// Shared view of a [`ScriptedSource`] that outlives the device owning it
#[derive(Clone)]
pub struct ScriptHandle {
    script: Arc<Mutex<Script>>,
}

impl ScriptedSource {
    pub fn valid(name: &str, firmware: &str) -> Self {
        Self {
            script: Arc::new(Mutex::new(Script {
                valid: true,
                identity: Some((name.to_string(), firmware.to_string())),
                diagnostics_enabled: true,
                ..Default::default()
            })),
        }
    }

    pub fn invalid() -> Self {
        Self {
            script: Arc::new(Mutex::new(Script::default())),
        }
    }

    pub fn without_identity(self) -> Self {
        self.script.lock().identity = None;
        self
    }

    pub fn with_attribute(self, identifier: u8, raw: [u8; 6], current: u8, worst: u8) -> Self {
        self.script
            .lock()
            .attributes
            .push(RawAttributeRecord::new(identifier, raw, current, worst));
        self
    }

    pub fn with_threshold(self, identifier: u8, threshold: u8) -> Self {
        self.script.lock().thresholds.push(RawThresholdRecord {
            identifier,
            threshold,
        });
        self
    }

    pub fn handle(&self) -> ScriptHandle {
        ScriptHandle {
            script: Arc::clone(&self.script),
        }
    }
}

impl ScriptHandle {
    pub fn close_count(&self) -> usize {
        self.script.lock().closes
    }

    pub fn set_attributes(&self, attributes: Vec<RawAttributeRecord>) {
        self.script.lock().attributes = attributes;
    }

    pub fn set_valid(&self, valid: bool) {
        self.script.lock().valid = valid;
    }
}

impl DiagnosticSource for ScriptedSource {
    fn is_valid(&self) -> bool {
        self.script.lock().valid
    }

    fn read_name_and_firmware(&self) -> Option<(String, String)> {
        let script = self.script.lock();
        if script.valid {
            script.identity.clone()
        } else {
            None
        }
    }

    fn enable_diagnostics(&self) -> bool {
        let script = self.script.lock();
        script.valid && script.diagnostics_enabled
    }

    fn read_attribute_records(&self) -> Vec<RawAttributeRecord> {
        let script = self.script.lock();
        if script.valid {
            script.attributes.clone()
        } else {
            Vec::new()
        }
    }

    fn read_threshold_records(&self) -> Vec<RawThresholdRecord> {
        let script = self.script.lock();
        if script.valid {
            script.thresholds.clone()
        } else {
            Vec::new()
        }
    }

    fn close(&mut self) {
        self.script.lock().closes += 1;
    }
}

/// Volume probe over a fixed table; sizes missing from the table fail
#[derive(Debug, Default)]
pub struct FixedVolumes {
    volumes: Vec<(u32, String)>,
    sizes: BTreeMap<String, u64>,
}

impl FixedVolumes {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_volume(mut self, drive_index: u32, label: &str, size: u64) -> Self {
        self.volumes.push((drive_index, label.to_string()));
        self.sizes.insert(label.to_string(), size);
        self
    }

    pub fn with_unreadable_volume(mut self, drive_index: u32, label: &str) -> Self {
        self.volumes.push((drive_index, label.to_string()));
        self
    }
}

impl VolumeProbe for FixedVolumes {
    fn logical_volumes(&self, drive_index: u32) -> Vec<String> {
        self.volumes
            .iter()
            .filter(|(index, _)| *index == drive_index)
            .map(|(_, label)| label.clone())
            .collect()
    }

    fn volume_size(&self, volume: &str) -> Result<u64> {
        self.sizes.get(volume).copied().ok_or_else(|| Error::VolumeAccess {
            volume: volume.to_string(),
            reason: "device not ready".to_string(),
        })
    }
}
