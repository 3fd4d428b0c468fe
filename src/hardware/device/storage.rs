//! Storage Device
//!
//! Owns one diagnostic source and the catalog of the profile the drive was
//! classified into, creates the drive's sensors once, and refreshes them on
//! every monitor tick.
//!
//! Lifecycle: `Constructed -> SensorsCreated -> Running -> Disposed`.

use crate::config::ParameterOverrides;
use crate::domain::ports::{DiagnosticSource, DriveIdentity, SensorRegistryRef, VolumeProbe};
use crate::error::{Error, Result};
use crate::hardware::classification::family::find_record;
use crate::hardware::classification::{present_identifiers, DeviceProfile, FamilyBehavior, ProfileRegistry};
use crate::hardware::device::report::build_report;
use crate::hardware::device::sensor::{AdditionalSensors, Sensor, SensorBindings};
use crate::hardware::device::source::SourceGuard;
use crate::hardware::smart::catalog::AttributeCatalog;
use tracing::{debug, info, warn};

/// Name used when neither the drive nor the OS reports one
pub const GENERIC_DRIVE_NAME: &str = "Generic Hard Disk";

/// Firmware revision used when none is reported
pub const UNKNOWN_FIRMWARE: &str = "Unknown";

// =============================================================================
// Device State
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceState {
    /// Source acquired and profile bound
    Constructed,
    /// Catalog sensors created and registered
    SensorsCreated,
    /// At least one refresh has run
    Running,
    /// Source released
    Disposed,
}

impl std::fmt::Display for DeviceState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeviceState::Constructed => write!(f, "Constructed"),
            DeviceState::SensorsCreated => write!(f, "SensorsCreated"),
            DeviceState::Running => write!(f, "Running"),
            DeviceState::Disposed => write!(f, "Disposed"),
        }
    }
}

// =============================================================================
// Storage Device
// =============================================================================

/// A classified drive and its sensors
pub struct StorageDevice {
    index: u32,
    name: String,
    firmware: String,
    profile: &'static str,
    catalog: AttributeCatalog,
    behavior: Box<dyn FamilyBehavior>,
    source: SourceGuard,
    registry: SensorRegistryRef,
    overrides: ParameterOverrides,
    bindings: SensorBindings,
    state: DeviceState,
}

impl StorageDevice {
    /// Bind an already classified drive to its profile
    pub fn new(
        index: u32,
        name: impl Into<String>,
        firmware: impl Into<String>,
        source: Box<dyn DiagnosticSource>,
        profile: &DeviceProfile,
        registry: SensorRegistryRef,
        overrides: ParameterOverrides,
    ) -> Self {
        Self {
            index,
            name: name.into(),
            firmware: firmware.into(),
            profile: profile.name,
            catalog: profile.catalog(),
            behavior: profile.behavior(),
            source: SourceGuard::new(source),
            registry,
            overrides,
            bindings: SensorBindings::new(),
            state: DeviceState::Constructed,
        }
    }

    /// Probe, name and classify a drive, then create its sensors.
    ///
    /// Fails with [`Error::UnsupportedDevice`] when the drive has no usable
    /// SMART data and no non-empty volume, or when no profile matches. The
    /// source is released on every failure path.
    pub fn open(
        identity: &DriveIdentity,
        source: Box<dyn DiagnosticSource>,
        volumes: &dyn VolumeProbe,
        profiles: &ProfileRegistry,
        registry: SensorRegistryRef,
        overrides: &ParameterOverrides,
    ) -> Result<Self> {
        let source = SourceGuard::new(source);
        let labels = volumes.logical_volumes(identity.index);

        let mut reported = None;
        let mut records = Vec::new();

        if source.is_valid() {
            reported = source.read_name_and_firmware();
            if source.enable_diagnostics() {
                records = source.read_attribute_records();
            } else {
                debug!(drive = identity.index, "SMART could not be enabled");
            }
        } else {
            if labels.is_empty() {
                info!(
                    drive = identity.index,
                    "Excluding drive without SMART support or logical volumes"
                );
                return Err(Error::unsupported(
                    display_or(&identity.name, GENERIC_DRIVE_NAME),
                    "no SMART support and no logical volumes",
                ));
            }
            if !has_nonempty_volume(identity, &labels, volumes) {
                info!(
                    drive = identity.index,
                    "Excluding drive without SMART support or non-empty partitions"
                );
                return Err(Error::unsupported(
                    display_or(&identity.name, GENERIC_DRIVE_NAME),
                    "no SMART support and no non-empty partitions",
                ));
            }
        }

        let (name, firmware) = resolve_name(identity, reported, &labels);
        debug!(device = %name, firmware = %firmware, "Attempting to classify drive");

        let profile = match profiles.classify_records(&records, &name) {
            Some(profile) => profile,
            None => {
                info!(device = %name, "Excluding drive: no matching device profile");
                return Err(Error::unsupported(name, "no matching device profile"));
            }
        };
        info!(device = %name, firmware = %firmware, profile = profile.name, "Drive classified");

        let mut device = Self {
            index: identity.index,
            name,
            firmware,
            profile: profile.name,
            catalog: profile.catalog(),
            behavior: profile.behavior(),
            source,
            registry,
            overrides: overrides.clone(),
            bindings: SensorBindings::new(),
            state: DeviceState::Constructed,
        };
        device.create_sensors()?;
        Ok(device)
    }

    /// Create one sensor per claimed `(type, channel)` slot.
    ///
    /// Attributes the drive does not report are skipped, and a slot already
    /// claimed by an earlier catalog entry is left to that entry.
    pub fn create_sensors(&mut self) -> Result<usize> {
        if self.state != DeviceState::Constructed {
            return Err(Error::InvalidState {
                expected: DeviceState::Constructed.to_string(),
                found: self.state.to_string(),
            });
        }

        let records = if self.source.is_valid() {
            self.source.read_attribute_records()
        } else {
            Vec::new()
        };
        let present = present_identifiers(&records);

        for (position, attribute) in self.catalog.iter().enumerate() {
            let Some(binding) = attribute.sensor else {
                continue;
            };
            if !present.contains(&attribute.identifier) {
                continue;
            }
            if !self.bindings.claim(binding) {
                debug!(
                    device = %self.name,
                    attribute = attribute.identifier,
                    sensor_type = %binding.sensor_type,
                    channel = binding.channel,
                    "Sensor slot already claimed"
                );
                continue;
            }

            let sensor = Sensor::new(
                self.index,
                attribute.sensor_name(),
                binding,
                attribute.default_hidden,
                attribute.parameters,
                &self.overrides,
            );
            self.registry.register(sensor.definition());
            self.bindings.bind(position, sensor);
        }

        self.state = DeviceState::SensorsCreated;
        let created = self.bindings.len();
        info!(device = %self.name, sensors = created, "Sensors created");
        Ok(created)
    }

    /// Refresh every bound sensor from a fresh attribute read, then let the
    /// family publish its derived sensors.
    ///
    /// Sensors whose attribute is missing from this read keep their value.
    /// Returns the number of catalog sensors updated.
    pub fn update_sensors(&mut self) -> usize {
        match self.state {
            DeviceState::SensorsCreated | DeviceState::Running => {}
            DeviceState::Constructed | DeviceState::Disposed => {
                debug!(device = %self.name, state = %self.state, "Update skipped");
                return 0;
            }
        }
        if !self.source.is_valid() {
            return 0;
        }

        let records = self.source.read_attribute_records();
        let mut updated = 0;

        for (position, sensor) in self.bindings.bound_mut() {
            let Some(attribute) = self.catalog.get(position) else {
                continue;
            };
            let Some(record) = find_record(&records, attribute.identifier) else {
                continue;
            };
            let value = attribute.convert(record, &sensor.parameter_values());
            sensor.set_value(value);
            self.registry.update(sensor.id(), value);
            updated += 1;
        }

        let mut additional =
            AdditionalSensors::new(self.index, &mut self.bindings, self.registry.as_ref(), &self.overrides);
        self.behavior.populate_additional_sensors(&records, &mut additional);

        self.state = DeviceState::Running;
        debug!(device = %self.name, updated, "Sensors updated");
        updated
    }

    /// SMART attribute table, empty when the drive reports nothing
    pub fn build_report(&self) -> String {
        if !self.source.is_valid() {
            return String::new();
        }
        let records = self.source.read_attribute_records();
        let thresholds = self.source.read_threshold_records();
        build_report(&self.catalog, &records, &thresholds)
    }

    /// Device header followed by the attribute table
    pub fn full_report(&self) -> String {
        format!(
            "Name: {}\nFirmware: {}\nProfile: {}\n\n{}",
            self.name,
            self.firmware,
            self.profile,
            self.build_report()
        )
    }

    /// Release the diagnostic source. Safe to call more than once.
    pub fn dispose(&mut self) {
        if self.state == DeviceState::Disposed {
            return;
        }
        self.source.close();
        self.state = DeviceState::Disposed;
        info!(device = %self.name, "Drive disposed");
    }

    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn firmware(&self) -> &str {
        &self.firmware
    }

    /// Name of the bound device profile
    pub fn profile(&self) -> &'static str {
        self.profile
    }

    pub fn state(&self) -> DeviceState {
        self.state
    }

    pub fn catalog(&self) -> &AttributeCatalog {
        &self.catalog
    }

    pub fn sensors(&self) -> &SensorBindings {
        &self.bindings
    }
}

impl std::fmt::Debug for StorageDevice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorageDevice")
            .field("index", &self.index)
            .field("name", &self.name)
            .field("firmware", &self.firmware)
            .field("profile", &self.profile)
            .field("state", &self.state)
            .field("sensors", &self.bindings.len())
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Naming
// =============================================================================

fn display_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}

/// Pick the display name and firmware, then append the volume labels
fn resolve_name(
    identity: &DriveIdentity,
    reported: Option<(String, String)>,
    labels: &[String],
) -> (String, String) {
    let (reported_name, reported_firmware) = reported.unwrap_or_default();

    let name = display_or(
        &reported_name,
        display_or(&identity.name, GENERIC_DRIVE_NAME),
    );
    let firmware = display_or(
        &reported_firmware,
        display_or(&identity.revision, UNKNOWN_FIRMWARE),
    );

    let mut name = name.to_string();
    if !labels.is_empty() {
        let volumes: Vec<String> = labels.iter().map(|l| format!("{}:", l)).collect();
        name.push_str(&format!(" ({})", volumes.join(", ")));
    }
    (name, firmware.to_string())
}

fn has_nonempty_volume(identity: &DriveIdentity, labels: &[String], volumes: &dyn VolumeProbe) -> bool {
    for label in labels {
        match volumes.volume_size(label) {
            Ok(size) if size > 0 => return true,
            Ok(_) => {}
            Err(e) => {
                warn!(
                    drive = identity.index,
                    volume = %label,
                    "Unable to read logical volume size: {}",
                    e
                );
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{RawAttributeRecord, SensorId, SensorType};
    use crate::hardware::classification::NoAdditionalSensors;
    use crate::hardware::device::testing::{FixedVolumes, ScriptedSource};
    use crate::hardware::registry::InMemorySensorRegistry;
    use crate::hardware::smart::attribute::{Conversion, SmartAttribute, TEMPERATURE_PARAMETERS};
    use assert_matches::assert_matches;
    use std::sync::Arc;

    fn identity(index: u32) -> DriveIdentity {
        DriveIdentity {
            index,
            name: "ST31000524AS".to_string(),
            revision: "JC45".to_string(),
        }
    }

    fn shared_temperature_catalog() -> AttributeCatalog {
        AttributeCatalog::new(vec![
            SmartAttribute::new(0xC2, "Temperature")
                .with_conversion(Conversion::Temperature { width: 1 })
                .with_sensor(SensorType::Temperature, 0)
                .with_parameters(TEMPERATURE_PARAMETERS),
            SmartAttribute::new(0xE7, "Drive Temperature")
                .with_conversion(Conversion::Temperature { width: 1 })
                .with_sensor(SensorType::Temperature, 0),
            SmartAttribute::new(0x09, "Power-On Hours").with_conversion(Conversion::RawU32),
        ])
    }

    fn shared_temperature_profile() -> DeviceProfile {
        DeviceProfile::new(
            "shared-temperature",
            &[],
            &[""],
            shared_temperature_catalog,
            NoAdditionalSensors::boxed,
        )
    }

    fn temperature_drive() -> ScriptedSource {
        ScriptedSource::valid("ST31000524AS", "JC45")
            .with_attribute(0x09, [0x8C, 0x4E, 0, 0, 0, 0], 79, 79)
            .with_attribute(0xC2, [0x23, 0, 0, 0, 0, 0], 112, 98)
            .with_attribute(0xE7, [0x30, 0, 0, 0, 0, 0], 100, 100)
            .with_threshold(0x09, 0)
    }

    fn open(
        source: ScriptedSource,
        volumes: &FixedVolumes,
        profiles: &ProfileRegistry,
        registry: &Arc<InMemorySensorRegistry>,
    ) -> Result<StorageDevice> {
        StorageDevice::open(
            &identity(0),
            Box::new(source),
            volumes,
            profiles,
            registry.clone(),
            &ParameterOverrides::new(),
        )
    }

    #[test]
    fn test_one_sensor_per_slot_first_wins() {
        let registry = Arc::new(InMemorySensorRegistry::new());
        let profiles = ProfileRegistry::new(vec![shared_temperature_profile()]);

        let mut device = open(temperature_drive(), &FixedVolumes::none(), &profiles, &registry).unwrap();
        assert_eq!(device.state(), DeviceState::SensorsCreated);
        assert_eq!(registry.len(), 1);

        let bound: Vec<(usize, &Sensor)> = device.sensors().bound().collect();
        assert_eq!(bound.len(), 1);
        assert_eq!(bound[0].0, 0);
        assert_eq!(bound[0].1.name(), "Temperature");

        device.update_sensors();
        assert_eq!(registry.value(&SensorId::from("/hdd/0/temperature/0")), Some(35.0));
    }

    #[test]
    fn test_absent_attribute_frees_slot_for_later_entry() {
        let registry = Arc::new(InMemorySensorRegistry::new());
        let profiles = ProfileRegistry::new(vec![shared_temperature_profile()]);
        let source = ScriptedSource::valid("ST31000524AS", "JC45").with_attribute(
            0xE7,
            [0x30, 0, 0, 0, 0, 0],
            100,
            100,
        );

        let device = open(source, &FixedVolumes::none(), &profiles, &registry).unwrap();
        let bound: Vec<(usize, &Sensor)> = device.sensors().bound().collect();
        assert_eq!(bound.len(), 1);
        assert_eq!(bound[0].0, 1);
        assert_eq!(bound[0].1.name(), "Drive Temperature");
    }

    #[test]
    fn test_missing_attribute_keeps_previous_value() {
        let registry = Arc::new(InMemorySensorRegistry::new());
        let profiles = ProfileRegistry::new(vec![shared_temperature_profile()]);
        let source = temperature_drive();
        let handle = source.handle();

        let mut device = open(source, &FixedVolumes::none(), &profiles, &registry).unwrap();
        assert_eq!(device.update_sensors(), 1);
        assert_eq!(device.state(), DeviceState::Running);

        handle.set_attributes(vec![RawAttributeRecord::new(0x09, [1, 0, 0, 0, 0, 0], 79, 79)]);
        assert_eq!(device.update_sensors(), 0);

        let id = SensorId::from("/hdd/0/temperature/0");
        assert_eq!(device.sensors().get(&id).and_then(|s| s.value()), Some(35.0));
        assert_eq!(registry.value(&id), Some(35.0));

        // An empty read is treated the same way
        handle.set_attributes(Vec::new());
        device.update_sensors();
        assert_eq!(device.sensors().get(&id).and_then(|s| s.value()), Some(35.0));
    }

    #[test]
    fn test_repeated_attribute_uses_last_record() {
        let registry = Arc::new(InMemorySensorRegistry::new());
        let profiles = ProfileRegistry::new(vec![shared_temperature_profile()]);
        let source = temperature_drive();
        let handle = source.handle();

        let mut device = open(source, &FixedVolumes::none(), &profiles, &registry).unwrap();

        handle.set_attributes(vec![
            RawAttributeRecord::new(0xC2, [0x20, 0, 0, 0, 0, 0], 100, 100),
            RawAttributeRecord::new(0xC2, [0x30, 0, 0, 0, 0, 0], 100, 100),
        ]);
        assert_eq!(device.update_sensors(), 1);
        assert_eq!(registry.value(&SensorId::from("/hdd/0/temperature/0")), Some(48.0));
    }

    #[test]
    fn test_update_ignores_records_after_end_marker() {
        let registry = Arc::new(InMemorySensorRegistry::new());
        let profiles = ProfileRegistry::new(vec![shared_temperature_profile()]);
        let source = temperature_drive();
        let handle = source.handle();

        let mut device = open(source, &FixedVolumes::none(), &profiles, &registry).unwrap();
        device.update_sensors();

        handle.set_attributes(vec![
            RawAttributeRecord::new(0x00, [0; 6], 0, 0),
            RawAttributeRecord::new(0xC2, [0x50, 0, 0, 0, 0, 0], 100, 100),
        ]);
        device.update_sensors();
        assert_eq!(registry.value(&SensorId::from("/hdd/0/temperature/0")), Some(35.0));
    }

    #[test]
    fn test_temperature_offset_override() {
        let registry = Arc::new(InMemorySensorRegistry::new());
        let profiles = ProfileRegistry::new(vec![shared_temperature_profile()]);
        let mut overrides = ParameterOverrides::new();
        overrides.insert("/hdd/0/temperature/0".to_string(), vec![-5.0]);

        let mut device = StorageDevice::open(
            &identity(0),
            Box::new(temperature_drive()),
            &FixedVolumes::none(),
            &profiles,
            registry.clone(),
            &overrides,
        )
        .unwrap();
        device.update_sensors();
        assert_eq!(registry.value(&SensorId::from("/hdd/0/temperature/0")), Some(30.0));
    }

    #[test]
    fn test_create_sensors_is_one_shot() {
        let registry = Arc::new(InMemorySensorRegistry::new());
        let profiles = ProfileRegistry::new(vec![shared_temperature_profile()]);
        let mut device = open(temperature_drive(), &FixedVolumes::none(), &profiles, &registry).unwrap();

        let err = device.create_sensors().unwrap_err();
        assert_matches!(err, Error::InvalidState { .. });
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_new_starts_constructed() {
        let registry = Arc::new(InMemorySensorRegistry::new());
        let profile = shared_temperature_profile();
        let mut device = StorageDevice::new(
            3,
            "ST31000524AS",
            "JC45",
            Box::new(temperature_drive()),
            &profile,
            registry.clone(),
            ParameterOverrides::new(),
        );
        assert_eq!(device.state(), DeviceState::Constructed);
        // No sensors yet, nothing to refresh
        assert_eq!(device.update_sensors(), 0);
        assert_eq!(device.state(), DeviceState::Constructed);

        assert_eq!(device.create_sensors().unwrap(), 1);
        assert!(registry.get(&SensorId::from("/hdd/3/temperature/0")).is_some());
    }

    #[test]
    fn test_dispose_closes_once() {
        let registry = Arc::new(InMemorySensorRegistry::new());
        let profiles = ProfileRegistry::new(vec![shared_temperature_profile()]);
        let source = temperature_drive();
        let handle = source.handle();

        let mut device = open(source, &FixedVolumes::none(), &profiles, &registry).unwrap();
        device.dispose();
        device.dispose();
        assert_eq!(device.state(), DeviceState::Disposed);
        assert_eq!(handle.close_count(), 1);

        // Disposed devices neither refresh nor report
        assert_eq!(device.update_sensors(), 0);
        assert_eq!(device.build_report(), "");

        drop(device);
        assert_eq!(handle.close_count(), 1);
    }

    #[test]
    fn test_unmatched_drive_releases_source() {
        let registry = Arc::new(InMemorySensorRegistry::new());
        let profiles = ProfileRegistry::new(vec![DeviceProfile::new(
            "needs-c2",
            &[0xC2],
            &[""],
            shared_temperature_catalog,
            NoAdditionalSensors::boxed,
        )]);
        let source = ScriptedSource::valid("ST31000524AS", "JC45").with_attribute(
            0x09,
            [1, 0, 0, 0, 0, 0],
            100,
            100,
        );
        let handle = source.handle();

        let err = open(source, &FixedVolumes::none(), &profiles, &registry).unwrap_err();
        assert_matches!(err, Error::UnsupportedDevice { ref name, .. } if name == "ST31000524AS");
        assert!(!err.is_fatal());
        assert_eq!(handle.close_count(), 1);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_invalid_source_without_volumes_is_unsupported() {
        let registry = Arc::new(InMemorySensorRegistry::new());
        let source = ScriptedSource::invalid();
        let handle = source.handle();

        let err = open(source, &FixedVolumes::none(), &ProfileRegistry::builtin(), &registry).unwrap_err();
        assert_matches!(err, Error::UnsupportedDevice { .. });
        assert_eq!(handle.close_count(), 1);
    }

    #[test]
    fn test_invalid_source_with_empty_volumes_is_unsupported() {
        let registry = Arc::new(InMemorySensorRegistry::new());
        let source = ScriptedSource::invalid();
        let handle = source.handle();
        let volumes = FixedVolumes::none()
            .with_volume(0, "E", 0)
            .with_unreadable_volume(0, "F");

        let err = open(source, &volumes, &ProfileRegistry::builtin(), &registry).unwrap_err();
        assert_matches!(err, Error::UnsupportedDevice { .. });
        assert_eq!(handle.close_count(), 1);
    }

    #[test]
    fn test_fallback_path_uses_os_identity() {
        let registry = Arc::new(InMemorySensorRegistry::new());
        let volumes = FixedVolumes::none()
            .with_unreadable_volume(0, "C")
            .with_volume(0, "D", 500_107_862_016);

        let mut device = open(ScriptedSource::invalid(), &volumes, &ProfileRegistry::builtin(), &registry).unwrap();
        assert_eq!(device.name(), "ST31000524AS (C:, D:)");
        assert_eq!(device.firmware(), "JC45");
        assert_eq!(device.profile(), "generic-hdd");
        assert!(device.sensors().is_empty());
        assert_eq!(device.update_sensors(), 0);
        assert_eq!(device.build_report(), "");
        assert!(device.full_report().starts_with("Name: ST31000524AS (C:, D:)\n"));
    }

    #[test]
    fn test_name_fallbacks() {
        let labels = vec!["C".to_string()];
        let reported = Some(("INTEL SSDSA2CW120G3".to_string(), "4PC10302".to_string()));
        assert_eq!(
            resolve_name(&identity(0), reported, &[]),
            ("INTEL SSDSA2CW120G3".to_string(), "4PC10302".to_string())
        );

        assert_eq!(
            resolve_name(&identity(0), None, &labels),
            ("ST31000524AS (C:)".to_string(), "JC45".to_string())
        );

        assert_eq!(
            resolve_name(&DriveIdentity::default(), None, &[]),
            (GENERIC_DRIVE_NAME.to_string(), UNKNOWN_FIRMWARE.to_string())
        );

        // Empty strings count as missing
        let blank = Some((String::new(), String::new()));
        assert_eq!(resolve_name(&identity(0), blank, &[]).0, "ST31000524AS");
    }

    #[test]
    fn test_unreadable_identity_falls_back_to_os() {
        let registry = Arc::new(InMemorySensorRegistry::new());
        let source = temperature_drive().without_identity();
        let device = open(source, &FixedVolumes::none(), &ProfileRegistry::builtin(), &registry).unwrap();
        assert_eq!(device.name(), "ST31000524AS");
        assert_eq!(device.profile(), "generic-hdd");
    }

    #[test]
    fn test_report_through_device() {
        let registry = Arc::new(InMemorySensorRegistry::new());
        let profiles = ProfileRegistry::new(vec![shared_temperature_profile()]);
        let source = temperature_drive();
        let handle = source.handle();
        let device = open(source, &FixedVolumes::none(), &profiles, &registry).unwrap();

        let report = device.build_report();
        assert!(report.starts_with(" ID Description"));
        assert!(report.contains(" 09 Power-On Hours"));
        assert!(report.ends_with("\n\n"));

        handle.set_valid(false);
        assert_eq!(device.build_report(), "");
    }

    #[test]
    fn test_builtin_sandforce_publishes_write_amplification() {
        let registry = Arc::new(InMemorySensorRegistry::new());
        let source = ScriptedSource::valid("OCZ-VERTEX3", "2.15")
            .with_attribute(0xAB, [0; 6], 100, 100)
            .with_attribute(0xAC, [0; 6], 100, 100)
            .with_attribute(0xE7, [0x5A, 0, 0, 0, 0, 0], 90, 90)
            .with_attribute(0xE9, [0x96, 0, 0, 0, 0, 0], 0, 0)
            .with_attribute(0xEA, [0x64, 0, 0, 0, 0, 0], 0, 0);

        let mut device = open(source, &FixedVolumes::none(), &ProfileRegistry::builtin(), &registry).unwrap();
        assert_eq!(device.profile(), "sandforce-ssd");

        device.update_sensors();
        assert_eq!(registry.value(&SensorId::from("/hdd/0/factor/0")), Some(1.5));
        assert_eq!(device.sensors().additional().len(), 1);

        device.update_sensors();
        assert_eq!(device.sensors().additional().len(), 1);
    }
}
