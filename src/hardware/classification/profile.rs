//! Device Profiles
//!
//! Classifies a drive into the device family whose SMART catalog should be
//! used to decode it. Profiles are tried strictly in registry order and the
//! first one whose required attributes are all present and whose name
//! prefixes match the drive name wins. There is no scoring: more specific
//! profiles must be registered before broader ones.

use crate::domain::ports::RawAttributeRecord;
use crate::hardware::classification::families;
use crate::hardware::classification::family::FamilyBehavior;
use crate::hardware::smart::catalog::AttributeCatalog;
use tracing::debug;

// =============================================================================
// Device Profile
// =============================================================================

/// Classification predicates plus the decoding setup of one device family
#[derive(Clone)]
pub struct DeviceProfile {
    /// Family name, for logs and reports
    pub name: &'static str,
    /// Attribute identifiers that must all be reported by the drive
    pub required_attributes: &'static [u8],
    /// Accepted model-name prefixes, compared ordinally and case-sensitively
    pub name_prefixes: &'static [&'static str],
    catalog: fn() -> AttributeCatalog,
    behavior: fn() -> Box<dyn FamilyBehavior>,
}

impl DeviceProfile {
    pub fn new(
        name: &'static str,
        required_attributes: &'static [u8],
        name_prefixes: &'static [&'static str],
        catalog: fn() -> AttributeCatalog,
        behavior: fn() -> Box<dyn FamilyBehavior>,
    ) -> Self {
        Self {
            name,
            required_attributes,
            name_prefixes,
            catalog,
            behavior,
        }
    }

    /// Check that every required attribute is present
    pub fn matches_attributes(&self, present: &[u8]) -> bool {
        self.required_attributes
            .iter()
            .all(|required| present.contains(required))
    }

    /// Check the drive name against the declared prefixes
    pub fn matches_name(&self, name: &str) -> bool {
        self.name_prefixes
            .iter()
            .any(|prefix| name.starts_with(prefix))
    }

    /// Build a fresh attribute catalog for a drive of this family
    pub fn catalog(&self) -> AttributeCatalog {
        (self.catalog)()
    }

    /// Build the family-specific sensor behaviour for a drive
    pub fn behavior(&self) -> Box<dyn FamilyBehavior> {
        (self.behavior)()
    }
}

impl std::fmt::Debug for DeviceProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeviceProfile")
            .field("name", &self.name)
            .field("required_attributes", &self.required_attributes)
            .field("name_prefixes", &self.name_prefixes)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Profile Registry
// =============================================================================

/// Ordered list of device profiles; order is precedence
#[derive(Debug, Clone)]
pub struct ProfileRegistry {
    profiles: Vec<DeviceProfile>,
}

impl ProfileRegistry {
    /// Create a registry from profiles in precedence order
    pub fn new(profiles: Vec<DeviceProfile>) -> Self {
        Self { profiles }
    }

    /// Registry with the built-in ATA drive families
    pub fn builtin() -> Self {
        Self::new(families::builtin_profiles())
    }

    /// Pick the first profile matching the present attributes and the name
    pub fn classify(&self, present: &[u8], name: &str) -> Option<&DeviceProfile> {
        for profile in &self.profiles {
            if !profile.matches_attributes(present) {
                continue;
            }
            if profile.matches_name(name) {
                debug!(device = %name, profile = profile.name, "Profile matched");
                return Some(profile);
            }
        }
        None
    }

    /// Classify from raw attribute records, ignoring anything past the
    /// end-of-table marker
    pub fn classify_records(&self, records: &[RawAttributeRecord], name: &str) -> Option<&DeviceProfile> {
        self.classify(&present_identifiers(records), name)
    }

    /// Look up a profile by family name
    pub fn get(&self, name: &str) -> Option<&DeviceProfile> {
        self.profiles.iter().find(|p| p.name == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DeviceProfile> {
        self.profiles.iter()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl Default for ProfileRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Identifiers of the valid part of an attribute table
pub fn present_identifiers(records: &[RawAttributeRecord]) -> Vec<u8> {
    records
        .iter()
        .take_while(|r| !r.is_end_marker())
        .map(|r| r.identifier)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hardware::classification::family::NoAdditionalSensors;
    use crate::hardware::smart::attribute::SmartAttribute;

    fn empty_catalog() -> AttributeCatalog {
        AttributeCatalog::empty()
    }

    fn one_attribute_catalog() -> AttributeCatalog {
        AttributeCatalog::new(vec![SmartAttribute::new(0x09, "Power-On Hours")])
    }

    fn profile(name: &'static str, required: &'static [u8], prefixes: &'static [&'static str]) -> DeviceProfile {
        DeviceProfile::new(name, required, prefixes, empty_catalog, NoAdditionalSensors::boxed)
    }

    #[test]
    fn test_first_matching_profile_wins() {
        let registry = ProfileRegistry::new(vec![
            profile("first", &[0x09], &["ACME"]),
            profile("second", &[0x09, 0x0C], &["ACME"]),
        ]);

        let matched = registry.classify(&[0x09, 0x0C], "ACME SSD 512GB").unwrap();
        assert_eq!(matched.name, "first");

        let reversed = ProfileRegistry::new(vec![
            profile("second", &[0x09, 0x0C], &["ACME"]),
            profile("first", &[0x09], &["ACME"]),
        ]);
        let matched = reversed.classify(&[0x09, 0x0C], "ACME SSD 512GB").unwrap();
        assert_eq!(matched.name, "second");
    }

    #[test]
    fn test_missing_required_attribute_skips_profile() {
        let registry = ProfileRegistry::new(vec![profile("strict", &[0x09, 0xE8], &[""])]);
        assert!(registry.classify(&[0x09], "anything").is_none());
        assert!(registry.classify(&[], "anything").is_none());
    }

    #[test]
    fn test_name_checked_only_after_attributes() {
        let registry = ProfileRegistry::new(vec![
            profile("vendor", &[0xAB], &["VENDOR"]),
            profile("fallback", &[], &[""]),
        ]);

        assert_eq!(registry.classify(&[0xAB], "VENDOR X1").unwrap().name, "vendor");
        assert_eq!(registry.classify(&[0xAB], "OTHER X1").unwrap().name, "fallback");
        assert_eq!(registry.classify(&[], "VENDOR X1").unwrap().name, "fallback");
    }

    #[test]
    fn test_prefix_is_case_sensitive() {
        let registry = ProfileRegistry::new(vec![profile("intel", &[], &["INTEL SSD"])]);
        assert!(registry.classify(&[], "INTEL SSDSC2BW240A4").is_some());
        assert!(registry.classify(&[], "Intel SSD 320").is_none());
        assert!(registry.classify(&[], "SSD INTEL").is_none());
    }

    #[test]
    fn test_no_prefixes_never_matches() {
        let registry = ProfileRegistry::new(vec![profile("nameless", &[], &[])]);
        assert!(registry.classify(&[0x01], "Any Disk").is_none());
    }

    #[test]
    fn test_classify_records_stops_at_end_marker() {
        let registry = ProfileRegistry::new(vec![profile("needs-c2", &[0xC2], &[""])]);
        let records = vec![
            RawAttributeRecord::new(0x09, [0; 6], 100, 100),
            RawAttributeRecord::new(0x00, [0; 6], 0, 0),
            RawAttributeRecord::new(0xC2, [0; 6], 100, 100),
        ];
        assert!(registry.classify_records(&records, "Disk").is_none());
        assert_eq!(present_identifiers(&records), vec![0x09]);
    }

    #[test]
    fn test_profile_builds_catalog() {
        let profile = DeviceProfile::new(
            "custom",
            &[],
            &[""],
            one_attribute_catalog,
            NoAdditionalSensors::boxed,
        );
        assert_eq!(profile.catalog().len(), 1);
        assert!(format!("{:?}", profile).contains("custom"));
    }

    #[test]
    fn test_builtin_registry_order() {
        let registry = ProfileRegistry::builtin();
        let names: Vec<_> = registry.iter().map(|p| p.name).collect();
        assert_eq!(
            names,
            vec![
                "plextor-ssd",
                "intel-ssd",
                "sandforce-ssd",
                "indilinx-ssd",
                "samsung-ssd",
                "micron-ssd",
                "samsung-hdd",
                "generic-hdd",
            ]
        );
    }

    #[test]
    fn test_builtin_generic_fallback() {
        let registry = ProfileRegistry::builtin();
        let matched = registry.classify(&[0x01, 0x09, 0xC2], "WDC WD10EZEX-08WN4A0").unwrap();
        assert_eq!(matched.name, "generic-hdd");

        // Not SMART capable at all still lands on the generic profile
        let matched = registry.classify(&[], "Generic Hard Disk").unwrap();
        assert_eq!(matched.name, "generic-hdd");
    }

    #[test]
    fn test_builtin_vendor_profiles() {
        let registry = ProfileRegistry::builtin();

        let intel = [0x05, 0x09, 0x0C, 0xE1, 0xE8, 0xE9];
        assert_eq!(registry.classify(&intel, "INTEL SSDSC2CW120A3").unwrap().name, "intel-ssd");
        // Same attributes under another name fall through to the generic disk
        assert_eq!(registry.classify(&intel, "KINGSTON SV300").unwrap().name, "generic-hdd");

        let sandforce = [0x01, 0x05, 0x09, 0x0C, 0xAB, 0xAC, 0xE7, 0xE9, 0xEA];
        assert_eq!(registry.classify(&sandforce, "KINGSTON SV300S37A120G").unwrap().name, "sandforce-ssd");

        let samsung = [0x05, 0x09, 0x0C, 0xB1, 0xB3, 0xB5, 0xB6, 0xBB];
        assert_eq!(registry.classify(&samsung, "Samsung SSD 850 EVO 250GB").unwrap().name, "samsung-ssd");

        assert_eq!(registry.classify(&[0x09], "PLEXTOR PX-256M5S").unwrap().name, "plextor-ssd");
    }
}
