//! Attribute Catalog
//!
//! The ordered list of attribute descriptors of one device family. Catalog
//! order matters: when two descriptors bind the same sensor slot, the
//! earlier one gets it.

use crate::hardware::smart::attribute::SmartAttribute;

/// Ordered set of SMART attribute descriptors
#[derive(Debug, Clone, Default)]
pub struct AttributeCatalog {
    attributes: Vec<SmartAttribute>,
}

impl AttributeCatalog {
    pub fn new(attributes: Vec<SmartAttribute>) -> Self {
        Self { attributes }
    }

    /// Catalog with no attributes
    pub fn empty() -> Self {
        Self::default()
    }

    /// First descriptor for an attribute identifier
    pub fn find(&self, identifier: u8) -> Option<&SmartAttribute> {
        self.attributes.iter().find(|a| a.identifier == identifier)
    }

    /// Last descriptor for an attribute identifier
    pub fn find_last(&self, identifier: u8) -> Option<&SmartAttribute> {
        self.attributes.iter().rev().find(|a| a.identifier == identifier)
    }

    /// Descriptor at a catalog position
    pub fn get(&self, position: usize) -> Option<&SmartAttribute> {
        self.attributes.get(position)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SmartAttribute> {
        self.attributes.iter()
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Number of descriptors bound to a sensor
    pub fn sensor_count(&self) -> usize {
        self.attributes.iter().filter(|a| a.sensor.is_some()).count()
    }
}

impl<'a> IntoIterator for &'a AttributeCatalog {
    type Item = &'a SmartAttribute;
    type IntoIter = std::slice::Iter<'a, SmartAttribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.attributes.iter()
    }
}

impl From<Vec<SmartAttribute>> for AttributeCatalog {
    fn from(attributes: Vec<SmartAttribute>) -> Self {
        Self::new(attributes)
    }
}
