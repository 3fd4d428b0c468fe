//! Solid State Drive Families
//!
//! Controller- and vendor-specific SSD profiles. Several controllers report
//! the same attribute identifiers with different meanings, so each family
//! carries its own catalog.

use crate::domain::ports::{RawAttributeRecord, SensorType};
use crate::hardware::classification::family::{find_record, FamilyBehavior, NoAdditionalSensors};
use crate::hardware::classification::profile::DeviceProfile;
use crate::hardware::device::sensor::AdditionalSensors;
use crate::hardware::smart::attribute::{Conversion, SmartAttribute, TEMPERATURE_PARAMETERS};
use crate::hardware::smart::catalog::AttributeCatalog;
use crate::hardware::smart::names::*;
use crate::hardware::smart::raw::decode_unsigned32;

/// Host write/read counters reported in 32 MiB units
const UNITS_32MIB_PER_GIB: f64 = 32.0;

/// Bytes per logical block for LBA counters
const LBA_BYTES: f64 = 512.0;

const BYTES_PER_GIB: f64 = 1024.0 * 1024.0 * 1024.0;

fn lbas_to_gib(record: &RawAttributeRecord, _: &[f64]) -> f64 {
    f64::from(decode_unsigned32(&record.raw_value)) * LBA_BYTES / BYTES_PER_GIB
}

fn remaining_from_used(record: &RawAttributeRecord, _: &[f64]) -> f64 {
    (100.0 - f64::from(decode_unsigned32(&record.raw_value))).max(0.0)
}

// =============================================================================
// Plextor
// =============================================================================

pub fn plextor() -> DeviceProfile {
    DeviceProfile::new(
        "plextor-ssd",
        &[],
        &["PLEXTOR"],
        plextor_catalog,
        NoAdditionalSensors::boxed,
    )
}

fn plextor_catalog() -> AttributeCatalog {
    AttributeCatalog::new(vec![
        SmartAttribute::new(0x09, POWER_ON_HOURS).with_conversion(Conversion::RawU32),
        SmartAttribute::new(0x0C, POWER_CYCLE_COUNT).with_conversion(Conversion::RawU32),
        SmartAttribute::new(0xF1, HOST_WRITES)
            .with_conversion(Conversion::RawScaled { divisor: UNITS_32MIB_PER_GIB })
            .with_sensor(SensorType::Data, 0),
        SmartAttribute::new(0xF2, HOST_READS)
            .with_conversion(Conversion::RawScaled { divisor: UNITS_32MIB_PER_GIB })
            .with_sensor(SensorType::Data, 1),
    ])
}

// =============================================================================
// Intel
// =============================================================================

pub fn intel() -> DeviceProfile {
    DeviceProfile::new(
        "intel-ssd",
        &[0xE1, 0xE8, 0xE9],
        &["INTEL SSD"],
        intel_catalog,
        NoAdditionalSensors::boxed,
    )
}

fn intel_catalog() -> AttributeCatalog {
    AttributeCatalog::new(vec![
        SmartAttribute::new(0x01, READ_ERROR_RATE),
        SmartAttribute::new(0x03, SPIN_UP_TIME),
        SmartAttribute::new(0x04, START_STOP_COUNT).with_conversion(Conversion::RawU32),
        SmartAttribute::new(0x05, REALLOCATED_SECTORS_COUNT),
        SmartAttribute::new(0x09, POWER_ON_HOURS).with_conversion(Conversion::RawU32),
        SmartAttribute::new(0x0C, POWER_CYCLE_COUNT).with_conversion(Conversion::RawU32),
        SmartAttribute::new(0xAA, AVAILABLE_RESERVED_SPACE),
        SmartAttribute::new(0xAB, PROGRAM_FAIL_COUNT),
        SmartAttribute::new(0xAC, ERASE_FAIL_COUNT),
        SmartAttribute::new(0xAE, UNEXPECTED_POWER_LOSS_COUNT).with_conversion(Conversion::RawU32),
        SmartAttribute::new(0xB7, SATA_DOWNSHIFT_ERROR_COUNT).with_conversion(Conversion::RawU32),
        SmartAttribute::new(0xB8, END_TO_END_ERROR),
        SmartAttribute::new(0xBB, REPORTED_UNCORRECTABLE_ERRORS).with_conversion(Conversion::RawU32),
        SmartAttribute::new(0xBE, TEMPERATURE)
            .with_conversion(Conversion::Temperature { width: 1 })
            .with_sensor(SensorType::Temperature, 0)
            .with_parameters(TEMPERATURE_PARAMETERS),
        SmartAttribute::new(0xC0, UNSAFE_SHUTDOWN_COUNT).with_conversion(Conversion::RawU32),
        SmartAttribute::new(0xC7, CRC_ERROR_COUNT).with_conversion(Conversion::RawU32),
        SmartAttribute::new(0xE1, HOST_WRITES)
            .with_conversion(Conversion::RawScaled { divisor: UNITS_32MIB_PER_GIB })
            .with_sensor(SensorType::Data, 0),
        SmartAttribute::new(0xE8, AVAILABLE_RESERVED_SPACE),
        SmartAttribute::new(0xE9, MEDIA_WEAROUT_INDICATOR)
            .with_sensor(SensorType::Level, 0)
            .with_sensor_name(REMAINING_LIFE),
        // Newer firmware moved host writes here; 0xE1 keeps the slot when both exist
        SmartAttribute::new(0xF1, HOST_WRITES)
            .with_conversion(Conversion::RawScaled { divisor: UNITS_32MIB_PER_GIB })
            .with_sensor(SensorType::Data, 0),
        SmartAttribute::new(0xF2, HOST_READS)
            .with_conversion(Conversion::RawScaled { divisor: UNITS_32MIB_PER_GIB })
            .with_sensor(SensorType::Data, 1),
    ])
}

// =============================================================================
// SandForce
// =============================================================================

pub fn sandforce() -> DeviceProfile {
    DeviceProfile::new(
        "sandforce-ssd",
        &[0xAB, 0xAC, 0xE9, 0xEA],
        &[""],
        sandforce_catalog,
        WriteAmplification::sandforce,
    )
}

fn sandforce_catalog() -> AttributeCatalog {
    AttributeCatalog::new(vec![
        SmartAttribute::new(0x01, READ_ERROR_RATE),
        SmartAttribute::new(0x05, RETIRED_BLOCK_COUNT).with_conversion(Conversion::RawU32),
        SmartAttribute::new(0x09, POWER_ON_HOURS).with_conversion(Conversion::RawU32),
        SmartAttribute::new(0x0C, POWER_CYCLE_COUNT).with_conversion(Conversion::RawU32),
        SmartAttribute::new(0xAB, PROGRAM_FAIL_COUNT).with_conversion(Conversion::RawU32),
        SmartAttribute::new(0xAC, ERASE_FAIL_COUNT).with_conversion(Conversion::RawU32),
        SmartAttribute::new(0xAE, UNEXPECTED_POWER_LOSS_COUNT).with_conversion(Conversion::RawU32),
        SmartAttribute::new(0xB1, WEAR_LEVELING_COUNT),
        SmartAttribute::new(0xB5, PROGRAM_FAIL_COUNT_TOTAL).with_conversion(Conversion::RawU32),
        SmartAttribute::new(0xB6, ERASE_FAIL_COUNT_TOTAL).with_conversion(Conversion::RawU32),
        SmartAttribute::new(0xBB, REPORTED_UNCORRECTABLE_ERRORS).with_conversion(Conversion::RawU32),
        SmartAttribute::new(0xC2, TEMPERATURE)
            .with_conversion(Conversion::Temperature { width: 1 })
            .with_sensor(SensorType::Temperature, 0)
            .with_parameters(TEMPERATURE_PARAMETERS),
        SmartAttribute::new(0xC3, HARDWARE_ECC_RECOVERED),
        SmartAttribute::new(0xC4, REALLOCATION_EVENT_COUNT).with_conversion(Conversion::RawU32),
        SmartAttribute::new(0xC9, SOFT_READ_ERROR_RATE),
        SmartAttribute::new(0xCC, SOFT_ECC_CORRECTION),
        SmartAttribute::new(0xE7, REMAINING_LIFE).with_sensor(SensorType::Level, 0),
        SmartAttribute::new(0xE9, CONTROLLER_WRITES_TO_NAND)
            .with_conversion(Conversion::RawU32)
            .with_sensor(SensorType::Data, 2)
            .hidden(),
        SmartAttribute::new(0xEA, HOST_WRITES_TO_CONTROLLER)
            .with_conversion(Conversion::RawU32)
            .with_sensor(SensorType::Data, 3)
            .hidden(),
        SmartAttribute::new(0xF1, LIFETIME_WRITES)
            .with_conversion(Conversion::RawU32)
            .with_sensor(SensorType::Data, 0)
            .with_sensor_name(HOST_WRITES),
        SmartAttribute::new(0xF2, LIFETIME_READS)
            .with_conversion(Conversion::RawU32)
            .with_sensor(SensorType::Data, 1)
            .with_sensor_name(HOST_READS),
    ])
}

// =============================================================================
// Indilinx
// =============================================================================

pub fn indilinx() -> DeviceProfile {
    DeviceProfile::new(
        "indilinx-ssd",
        &[0x01, 0x09, 0x0C, 0xB8, 0xC3, 0xC4, 0xD1],
        &[""],
        indilinx_catalog,
        NoAdditionalSensors::boxed,
    )
}

fn indilinx_catalog() -> AttributeCatalog {
    AttributeCatalog::new(vec![
        SmartAttribute::new(0x01, READ_ERROR_RATE),
        SmartAttribute::new(0x09, POWER_ON_HOURS).with_conversion(Conversion::RawU32),
        SmartAttribute::new(0x0C, POWER_CYCLE_COUNT).with_conversion(Conversion::RawU32),
        SmartAttribute::new(0xB8, INITIAL_BAD_BLOCK_COUNT).with_conversion(Conversion::RawU32),
        SmartAttribute::new(0xC3, PROGRAM_FAIL_COUNT).with_conversion(Conversion::RawU32),
        SmartAttribute::new(0xC4, ERASE_FAIL_COUNT).with_conversion(Conversion::RawU32),
        SmartAttribute::new(0xC6, SECTORS_READ).with_conversion(Conversion::RawU32),
        SmartAttribute::new(0xC7, SECTORS_WRITTEN).with_conversion(Conversion::RawU32),
        SmartAttribute::new(0xCA, MAX_ERASE_COUNT).with_conversion(Conversion::RawU32),
        SmartAttribute::new(0xCB, MIN_ERASE_COUNT).with_conversion(Conversion::RawU32),
        SmartAttribute::new(0xCC, AVERAGE_ERASE_COUNT).with_conversion(Conversion::RawU32),
        SmartAttribute::new(0xD1, REMAINING_LIFE).with_sensor(SensorType::Level, 0),
        SmartAttribute::new(0xD2, BAD_BLOCK_FULL_FLAG),
        SmartAttribute::new(0xD3, MAX_PE_COUNT_SPEC).with_conversion(Conversion::RawU32),
    ])
}

// =============================================================================
// Samsung
// =============================================================================

pub fn samsung() -> DeviceProfile {
    DeviceProfile::new(
        "samsung-ssd",
        &[0x05, 0x09, 0x0C, 0xB1, 0xB3, 0xB5, 0xB6],
        &["SAMSUNG SSD", "Samsung SSD"],
        samsung_catalog,
        NoAdditionalSensors::boxed,
    )
}

fn samsung_catalog() -> AttributeCatalog {
    AttributeCatalog::new(vec![
        SmartAttribute::new(0x05, REALLOCATED_SECTORS_COUNT).with_conversion(Conversion::RawU32),
        SmartAttribute::new(0x09, POWER_ON_HOURS).with_conversion(Conversion::RawU32),
        SmartAttribute::new(0x0C, POWER_CYCLE_COUNT).with_conversion(Conversion::RawU32),
        SmartAttribute::new(0xB1, WEAR_LEVELING_COUNT)
            .with_sensor(SensorType::Level, 0)
            .with_sensor_name(REMAINING_LIFE),
        SmartAttribute::new(0xB2, USED_RESERVED_BLOCK_COUNT_CHIP).with_conversion(Conversion::RawU32),
        SmartAttribute::new(0xB3, USED_RESERVED_BLOCK_COUNT_TOTAL).with_conversion(Conversion::RawU32),
        SmartAttribute::new(0xB4, UNUSED_RESERVED_BLOCK_COUNT_TOTAL).with_conversion(Conversion::RawU32),
        SmartAttribute::new(0xB5, PROGRAM_FAIL_COUNT_TOTAL).with_conversion(Conversion::RawU32),
        SmartAttribute::new(0xB6, ERASE_FAIL_COUNT_TOTAL).with_conversion(Conversion::RawU32),
        SmartAttribute::new(0xB7, RUNTIME_BAD_BLOCK_TOTAL).with_conversion(Conversion::RawU32),
        SmartAttribute::new(0xBB, REPORTED_UNCORRECTABLE_ERRORS).with_conversion(Conversion::RawU32),
        SmartAttribute::new(0xBE, AIRFLOW_TEMPERATURE)
            .with_conversion(Conversion::Temperature { width: 1 })
            .with_sensor(SensorType::Temperature, 0)
            .with_sensor_name(TEMPERATURE)
            .with_parameters(TEMPERATURE_PARAMETERS),
        // Older models report temperature here instead of 0xBE
        SmartAttribute::new(0xC2, TEMPERATURE)
            .with_conversion(Conversion::Temperature { width: 1 })
            .with_sensor(SensorType::Temperature, 0)
            .with_parameters(TEMPERATURE_PARAMETERS),
        SmartAttribute::new(0xC3, ECC_RATE),
        SmartAttribute::new(0xC6, OFFLINE_UNCORRECTABLE).with_conversion(Conversion::RawU32),
        SmartAttribute::new(0xC7, CRC_ERROR_COUNT).with_conversion(Conversion::RawU32),
        SmartAttribute::new(0xC9, SUPERCAP_STATUS),
        SmartAttribute::new(0xCA, EXCEPTION_MODE_STATUS),
        SmartAttribute::new(0xEB, POWER_RECOVERY_COUNT).with_conversion(Conversion::RawU32),
        SmartAttribute::new(0xF1, TOTAL_LBAS_WRITTEN)
            .with_conversion(Conversion::Custom(lbas_to_gib))
            .with_sensor(SensorType::Data, 0)
            .with_sensor_name(HOST_WRITES),
        SmartAttribute::new(0xF2, TOTAL_LBAS_READ)
            .with_conversion(Conversion::Custom(lbas_to_gib))
            .with_sensor(SensorType::Data, 1)
            .with_sensor_name(HOST_READS),
    ])
}

// =============================================================================
// Micron / Crucial
// =============================================================================

pub fn micron() -> DeviceProfile {
    DeviceProfile::new(
        "micron-ssd",
        &[0xAD, 0xCA],
        &["C300-", "M4-", "Crucial", "Micron", "MTFD"],
        micron_catalog,
        WriteAmplification::micron,
    )
}

fn micron_catalog() -> AttributeCatalog {
    AttributeCatalog::new(vec![
        SmartAttribute::new(0x01, READ_ERROR_RATE),
        SmartAttribute::new(0x05, REALLOCATED_SECTORS_COUNT).with_conversion(Conversion::RawU32),
        SmartAttribute::new(0x09, POWER_ON_HOURS).with_conversion(Conversion::RawU32),
        SmartAttribute::new(0x0C, POWER_CYCLE_COUNT).with_conversion(Conversion::RawU32),
        SmartAttribute::new(0xAA, AVAILABLE_RESERVED_SPACE),
        SmartAttribute::new(0xAB, PROGRAM_FAIL_COUNT).with_conversion(Conversion::RawU32),
        SmartAttribute::new(0xAC, ERASE_FAIL_COUNT).with_conversion(Conversion::RawU32),
        SmartAttribute::new(0xAD, AVERAGE_ERASE_COUNT).with_conversion(Conversion::RawU32),
        SmartAttribute::new(0xAE, UNEXPECTED_POWER_LOSS_COUNT).with_conversion(Conversion::RawU32),
        SmartAttribute::new(0xB7, SATA_DOWNSHIFT_ERROR_COUNT).with_conversion(Conversion::RawU32),
        SmartAttribute::new(0xB8, END_TO_END_ERROR),
        SmartAttribute::new(0xBB, REPORTED_UNCORRECTABLE_ERRORS).with_conversion(Conversion::RawU32),
        // Two-byte signed reading, sub-zero values are real on cold boots
        SmartAttribute::new(0xC2, TEMPERATURE)
            .with_conversion(Conversion::Temperature { width: 2 })
            .with_sensor(SensorType::Temperature, 0)
            .with_parameters(TEMPERATURE_PARAMETERS),
        SmartAttribute::new(0xC4, REALLOCATION_EVENT_COUNT).with_conversion(Conversion::RawU32),
        SmartAttribute::new(0xC5, CURRENT_PENDING_SECTOR_COUNT).with_conversion(Conversion::RawU32),
        SmartAttribute::new(0xC6, OFFLINE_UNCORRECTABLE).with_conversion(Conversion::RawU32),
        SmartAttribute::new(0xC7, ULTRA_DMA_CRC_ERROR_COUNT).with_conversion(Conversion::RawU32),
        SmartAttribute::new(0xCA, PERCENT_LIFETIME_USED)
            .with_conversion(Conversion::Custom(remaining_from_used))
            .with_sensor(SensorType::Level, 0)
            .with_sensor_name(REMAINING_LIFE),
        SmartAttribute::new(0xCE, WRITE_ERROR_RATE),
        SmartAttribute::new(0xF7, HOST_PROGRAM_PAGE_COUNT).with_conversion(Conversion::RawU32),
        SmartAttribute::new(0xF8, FTL_PROGRAM_PAGE_COUNT).with_conversion(Conversion::RawU32),
    ])
}

// =============================================================================
// Write Amplification
// =============================================================================

/// Derived write-amplification factor published on Factor channel 0
#[derive(Debug, Clone, Copy)]
pub struct WriteAmplification {
    /// Attribute holding NAND-side writes (or FTL pages on Micron)
    nand_writes: u8,
    /// Attribute holding host-side writes
    host_writes: u8,
    /// Whether NAND-side writes exclude the host writes
    additive: bool,
}

impl WriteAmplification {
    /// Controller writes (0xE9) over host writes (0xEA)
    pub fn sandforce() -> Box<dyn FamilyBehavior> {
        Box::new(Self {
            nand_writes: 0xE9,
            host_writes: 0xEA,
            additive: false,
        })
    }

    /// (host pages 0xF7 + FTL pages 0xF8) over host pages
    pub fn micron() -> Box<dyn FamilyBehavior> {
        Box::new(Self {
            nand_writes: 0xF8,
            host_writes: 0xF7,
            additive: true,
        })
    }

    /// Compute the factor, `None` when either counter is missing
    pub fn compute(&self, records: &[RawAttributeRecord]) -> Option<f64> {
        let nand = f64::from(decode_unsigned32(&find_record(records, self.nand_writes)?.raw_value));
        let host = f64::from(decode_unsigned32(&find_record(records, self.host_writes)?.raw_value));

        if host <= 0.0 {
            return Some(0.0);
        }

        let total = if self.additive { host + nand } else { nand };
        Some(total / host)
    }
}

impl FamilyBehavior for WriteAmplification {
    fn populate_additional_sensors(
        &mut self,
        records: &[RawAttributeRecord],
        sensors: &mut AdditionalSensors<'_>,
    ) {
        if let Some(factor) = self.compute(records) {
            sensors.publish(WRITE_AMPLIFICATION, SensorType::Factor, 0, factor);
        }
    }
}
