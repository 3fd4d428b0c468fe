//! Family Behaviours
//!
//! The single extension point a device family gets beyond its attribute
//! catalog: after the catalog-driven sensors are refreshed, the family may
//! publish extra derived sensors from the same attribute table.

use crate::domain::ports::RawAttributeRecord;
use crate::hardware::device::sensor::AdditionalSensors;

/// Device-family hook run after every catalog update
pub trait FamilyBehavior: Send {
    /// Publish derived sensors from the current attribute table
    fn populate_additional_sensors(
        &mut self,
        records: &[RawAttributeRecord],
        sensors: &mut AdditionalSensors<'_>,
    );
}

/// Behaviour of families without derived sensors
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAdditionalSensors;

impl NoAdditionalSensors {
    pub fn boxed() -> Box<dyn FamilyBehavior> {
        Box::new(NoAdditionalSensors)
    }
}

impl FamilyBehavior for NoAdditionalSensors {
    fn populate_additional_sensors(&mut self, _: &[RawAttributeRecord], _: &mut AdditionalSensors<'_>) {}
}

/// Find a record by identifier in the valid part of a table.
///
/// A drive repeating an identifier is read as reporting it twice; the later
/// record is the current one.
pub(crate) fn find_record(records: &[RawAttributeRecord], identifier: u8) -> Option<&RawAttributeRecord> {
    records
        .iter()
        .take_while(|r| !r.is_end_marker())
        .filter(|r| r.identifier == identifier)
        .last()
}
