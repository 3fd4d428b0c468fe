//! Hard Disk Families
//!
//! Rotating-media profiles: Samsung desktop and notebook disks, and the
//! generic fallback that accepts any drive.

use crate::domain::ports::SensorType;
use crate::hardware::classification::family::NoAdditionalSensors;
use crate::hardware::classification::profile::DeviceProfile;
use crate::hardware::smart::attribute::{Conversion, SmartAttribute, TEMPERATURE_PARAMETERS};
use crate::hardware::smart::catalog::AttributeCatalog;
use crate::hardware::smart::names::*;

// =============================================================================
// Samsung HDD
// =============================================================================

pub fn samsung() -> DeviceProfile {
    DeviceProfile::new(
        "samsung-hdd",
        &[0x01, 0x09, 0xC2],
        &["SAMSUNG HD", "SAMSUNG HM", "SAMSUNG HN", "SAMSUNG SP", "SAMSUNG SV"],
        samsung_catalog,
        NoAdditionalSensors::boxed,
    )
}

fn samsung_catalog() -> AttributeCatalog {
    AttributeCatalog::new(vec![
        SmartAttribute::new(0x01, READ_ERROR_RATE),
        SmartAttribute::new(0x03, SPIN_UP_TIME),
        SmartAttribute::new(0x04, START_STOP_COUNT).with_conversion(Conversion::RawU32),
        SmartAttribute::new(0x05, REALLOCATED_SECTORS_COUNT),
        SmartAttribute::new(0x07, SEEK_ERROR_RATE),
        SmartAttribute::new(0x08, SEEK_TIME_PERFORMANCE),
        SmartAttribute::new(0x09, POWER_ON_HOURS).with_conversion(Conversion::RawU32),
        SmartAttribute::new(0x0A, SPIN_RETRY_COUNT),
        SmartAttribute::new(0x0B, RECALIBRATION_RETRIES),
        SmartAttribute::new(0x0C, POWER_CYCLE_COUNT).with_conversion(Conversion::RawU32),
        SmartAttribute::new(0xB7, RUNTIME_BAD_BLOCK_TOTAL),
        SmartAttribute::new(0xB8, END_TO_END_ERROR),
        SmartAttribute::new(0xBB, REPORTED_UNCORRECTABLE_ERRORS).with_conversion(Conversion::RawU32),
        SmartAttribute::new(0xBE, AIRFLOW_TEMPERATURE)
            .with_conversion(Conversion::Temperature { width: 1 })
            .with_sensor(SensorType::Temperature, 1)
            .with_parameters(TEMPERATURE_PARAMETERS)
            .hidden(),
        SmartAttribute::new(0xC2, TEMPERATURE)
            .with_conversion(Conversion::Temperature { width: 1 })
            .with_sensor(SensorType::Temperature, 0)
            .with_parameters(TEMPERATURE_PARAMETERS),
        SmartAttribute::new(0xC3, HARDWARE_ECC_RECOVERED),
        SmartAttribute::new(0xC4, REALLOCATION_EVENT_COUNT).with_conversion(Conversion::RawU32),
        SmartAttribute::new(0xC5, CURRENT_PENDING_SECTOR_COUNT).with_conversion(Conversion::RawU32),
        SmartAttribute::new(0xC6, UNCORRECTABLE_SECTOR_COUNT).with_conversion(Conversion::RawU32),
        SmartAttribute::new(0xC7, ULTRA_DMA_CRC_ERROR_COUNT).with_conversion(Conversion::RawU32),
        SmartAttribute::new(0xC8, WRITE_ERROR_RATE),
    ])
}

// =============================================================================
// Generic Hard Disk
// =============================================================================

/// Fallback profile: no required attributes, empty prefix
pub fn generic() -> DeviceProfile {
    DeviceProfile::new(
        "generic-hdd",
        &[],
        &[""],
        generic_catalog,
        NoAdditionalSensors::boxed,
    )
}

fn generic_catalog() -> AttributeCatalog {
    AttributeCatalog::new(vec![
        SmartAttribute::new(0x01, READ_ERROR_RATE),
        SmartAttribute::new(0x02, THROUGHPUT_PERFORMANCE),
        SmartAttribute::new(0x03, SPIN_UP_TIME),
        SmartAttribute::new(0x04, START_STOP_COUNT).with_conversion(Conversion::RawU32),
        SmartAttribute::new(0x05, REALLOCATED_SECTORS_COUNT),
        SmartAttribute::new(0x06, READ_CHANNEL_MARGIN),
        SmartAttribute::new(0x07, SEEK_ERROR_RATE),
        SmartAttribute::new(0x08, SEEK_TIME_PERFORMANCE),
        SmartAttribute::new(0x09, POWER_ON_HOURS).with_conversion(Conversion::RawU32),
        SmartAttribute::new(0x0A, SPIN_RETRY_COUNT),
        SmartAttribute::new(0x0B, RECALIBRATION_RETRIES),
        SmartAttribute::new(0x0C, POWER_CYCLE_COUNT).with_conversion(Conversion::RawU32),
        SmartAttribute::new(0x0D, SOFT_READ_ERROR_RATE),
        SmartAttribute::new(0xB7, SATA_DOWNSHIFT_ERROR_COUNT).with_conversion(Conversion::RawU32),
        SmartAttribute::new(0xB8, END_TO_END_ERROR),
        SmartAttribute::new(0xBB, REPORTED_UNCORRECTABLE_ERRORS).with_conversion(Conversion::RawU32),
        SmartAttribute::new(0xBD, HIGH_FLY_WRITES),
        SmartAttribute::new(0xBE, AIRFLOW_TEMPERATURE)
            .with_conversion(Conversion::Temperature { width: 1 })
            .with_sensor(SensorType::Temperature, 1)
            .with_parameters(TEMPERATURE_PARAMETERS),
        SmartAttribute::new(0xBF, G_SENSE_ERROR_RATE),
        SmartAttribute::new(0xC0, POWER_OFF_RETRACT_COUNT),
        SmartAttribute::new(0xC1, LOAD_CYCLE_COUNT).with_conversion(Conversion::RawU32),
        SmartAttribute::new(0xC2, TEMPERATURE)
            .with_conversion(Conversion::Temperature { width: 1 })
            .with_sensor(SensorType::Temperature, 0)
            .with_parameters(TEMPERATURE_PARAMETERS),
        SmartAttribute::new(0xC3, HARDWARE_ECC_RECOVERED),
        SmartAttribute::new(0xC4, REALLOCATION_EVENT_COUNT).with_conversion(Conversion::RawU32),
        SmartAttribute::new(0xC5, CURRENT_PENDING_SECTOR_COUNT).with_conversion(Conversion::RawU32),
        SmartAttribute::new(0xC6, UNCORRECTABLE_SECTOR_COUNT).with_conversion(Conversion::RawU32),
        SmartAttribute::new(0xC7, ULTRA_DMA_CRC_ERROR_COUNT).with_conversion(Conversion::RawU32),
        SmartAttribute::new(0xC8, WRITE_ERROR_RATE),
        SmartAttribute::new(0xCA, DATA_ADDRESS_MARK_ERRORS),
        SmartAttribute::new(0xCB, RUN_OUT_CANCEL),
        SmartAttribute::new(0xCC, SOFT_ECC_CORRECTION),
        SmartAttribute::new(0xCD, THERMAL_ASPERITY_RATE),
        SmartAttribute::new(0xCE, FLYING_HEIGHT),
        SmartAttribute::new(0xCF, SPIN_HIGH_CURRENT),
        SmartAttribute::new(0xD0, SPIN_BUZZ),
        SmartAttribute::new(0xD1, OFFLINE_SEEK_PERFORMANCE),
        SmartAttribute::new(0xDC, DISK_SHIFT),
        SmartAttribute::new(0xDD, G_SENSE_ERROR_RATE_ALTERNATE),
        SmartAttribute::new(0xDE, LOADED_HOURS),
        SmartAttribute::new(0xDF, LOAD_UNLOAD_RETRY_COUNT),
        SmartAttribute::new(0xE0, LOAD_FRICTION),
        SmartAttribute::new(0xE1, LOAD_UNLOAD_CYCLE_COUNT),
        SmartAttribute::new(0xE2, LOAD_IN_TIME),
        SmartAttribute::new(0xE3, TORQUE_AMPLIFICATION_COUNT),
        SmartAttribute::new(0xE4, POWER_OFF_RETRACT_CYCLE),
        SmartAttribute::new(0xE6, GMR_HEAD_AMPLITUDE),
        // Shares channel 0 with 0xC2; drives reporting both keep 0xC2
        SmartAttribute::new(0xE7, DRIVE_TEMPERATURE)
            .with_conversion(Conversion::Temperature { width: 1 })
            .with_sensor(SensorType::Temperature, 0)
            .with_parameters(TEMPERATURE_PARAMETERS),
        SmartAttribute::new(0xF0, HEAD_FLYING_HOURS),
        SmartAttribute::new(0xF1, TOTAL_LBAS_WRITTEN).with_conversion(Conversion::RawU32),
        SmartAttribute::new(0xF2, TOTAL_LBAS_READ).with_conversion(Conversion::RawU32),
        SmartAttribute::new(0xFA, READ_ERROR_RETRY_RATE),
        SmartAttribute::new(0xFE, FREE_FALL_PROTECTION),
    ])
}
