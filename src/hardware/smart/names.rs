//! Display names for SMART attributes
//!
//! Shared by the built-in profile catalogs so the same attribute reads the
//! same in every report.

pub const READ_ERROR_RATE: &str = "Read Error Rate";
pub const THROUGHPUT_PERFORMANCE: &str = "Throughput Performance";
pub const SPIN_UP_TIME: &str = "Spin-Up Time";
pub const START_STOP_COUNT: &str = "Start/Stop Count";
pub const REALLOCATED_SECTORS_COUNT: &str = "Reallocated Sectors Count";
pub const READ_CHANNEL_MARGIN: &str = "Read Channel Margin";
pub const SEEK_ERROR_RATE: &str = "Seek Error Rate";
pub const SEEK_TIME_PERFORMANCE: &str = "Seek Time Performance";
pub const POWER_ON_HOURS: &str = "Power-On Hours (POH)";
pub const SPIN_RETRY_COUNT: &str = "Spin Retry Count";
pub const RECALIBRATION_RETRIES: &str = "Recalibration Retries";
pub const POWER_CYCLE_COUNT: &str = "Power Cycle Count";
pub const SOFT_READ_ERROR_RATE: &str = "Soft Read Error Rate";
pub const SATA_DOWNSHIFT_ERROR_COUNT: &str = "SATA Downshift Error Count";
pub const END_TO_END_ERROR: &str = "End-to-End error";
pub const HIGH_FLY_WRITES: &str = "High Fly Writes (WDC)";
pub const AIRFLOW_TEMPERATURE: &str = "Airflow Temperature";
pub const G_SENSE_ERROR_RATE: &str = "G-sense Error Rate";
pub const POWER_OFF_RETRACT_COUNT: &str = "Power-Off Retract Count";
pub const LOAD_CYCLE_COUNT: &str = "Load/Unload Cycle Count";
pub const TEMPERATURE: &str = "Temperature";
pub const HARDWARE_ECC_RECOVERED: &str = "Hardware ECC Recovered";
pub const REALLOCATION_EVENT_COUNT: &str = "Reallocation Event Count";
pub const CURRENT_PENDING_SECTOR_COUNT: &str = "Current Pending Sector Count";
pub const UNCORRECTABLE_SECTOR_COUNT: &str = "Uncorrectable Sector Count";
pub const ULTRA_DMA_CRC_ERROR_COUNT: &str = "UltraDMA CRC Error Count";
pub const WRITE_ERROR_RATE: &str = "Write Error Rate / Multi-Zone Error Rate";
pub const DATA_ADDRESS_MARK_ERRORS: &str = "Data Address Mark errors";
pub const RUN_OUT_CANCEL: &str = "Run Out Cancel";
pub const SOFT_ECC_CORRECTION: &str = "Soft ECC Correction";
pub const THERMAL_ASPERITY_RATE: &str = "Thermal Asperity Rate (TAR)";
pub const FLYING_HEIGHT: &str = "Flying Height";
pub const SPIN_HIGH_CURRENT: &str = "Spin High Current";
pub const SPIN_BUZZ: &str = "Spin Buzz";
pub const OFFLINE_SEEK_PERFORMANCE: &str = "Offline Seek Performance";
pub const DISK_SHIFT: &str = "Disk Shift";
pub const G_SENSE_ERROR_RATE_ALTERNATE: &str = "G-Sense Error Rate";
pub const LOADED_HOURS: &str = "Loaded Hours";
pub const LOAD_UNLOAD_RETRY_COUNT: &str = "Load/Unload Retry Count";
pub const LOAD_FRICTION: &str = "Load Friction";
pub const LOAD_UNLOAD_CYCLE_COUNT: &str = "Load/Unload Cycle Count";
pub const LOAD_IN_TIME: &str = "Load 'In'-time";
pub const TORQUE_AMPLIFICATION_COUNT: &str = "Torque Amplification Count";
pub const POWER_OFF_RETRACT_CYCLE: &str = "Power-Off Retract Cycle";
pub const GMR_HEAD_AMPLITUDE: &str = "GMR Head Amplitude";
pub const DRIVE_TEMPERATURE: &str = "Drive Temperature";
pub const HEAD_FLYING_HOURS: &str = "Head Flying Hours";
pub const TOTAL_LBAS_WRITTEN: &str = "Total LBAs Written";
pub const TOTAL_LBAS_READ: &str = "Total LBAs Read";
pub const READ_ERROR_RETRY_RATE: &str = "Read Error Retry Rate";
pub const FREE_FALL_PROTECTION: &str = "Free Fall Protection";

// Solid state
pub const AVAILABLE_RESERVED_SPACE: &str = "Available Reserved Space";
pub const PROGRAM_FAIL_COUNT: &str = "Program Fail Count";
pub const ERASE_FAIL_COUNT: &str = "Erase Fail Count";
pub const AVERAGE_ERASE_COUNT: &str = "Average Block-Erase Count";
pub const UNEXPECTED_POWER_LOSS_COUNT: &str = "Unexpected Power Loss Count";
pub const RETIRED_BLOCK_COUNT: &str = "Retired Block Count";
pub const WEAR_LEVELING_COUNT: &str = "Wear Leveling Count";
pub const USED_RESERVED_BLOCK_COUNT_CHIP: &str = "Used Reserved Block Count (Chip)";
pub const USED_RESERVED_BLOCK_COUNT_TOTAL: &str = "Used Reserved Block Count (Total)";
pub const UNUSED_RESERVED_BLOCK_COUNT_TOTAL: &str = "Unused Reserved Block Count (Total)";
pub const PROGRAM_FAIL_COUNT_TOTAL: &str = "Program Fail Count (Total)";
pub const ERASE_FAIL_COUNT_TOTAL: &str = "Erase Fail Count (Total)";
pub const RUNTIME_BAD_BLOCK_TOTAL: &str = "Runtime Bad Block (Total)";
pub const REPORTED_UNCORRECTABLE_ERRORS: &str = "Reported Uncorrectable Errors";
pub const ECC_RATE: &str = "ECC Rate";
pub const OFFLINE_UNCORRECTABLE: &str = "Offline Uncorrectable";
pub const CRC_ERROR_COUNT: &str = "CRC Error Count";
pub const SUPERCAP_STATUS: &str = "Supercap Status";
pub const EXCEPTION_MODE_STATUS: &str = "Exception Mode Status";
pub const POWER_RECOVERY_COUNT: &str = "Power Recovery Count";
pub const UNSAFE_SHUTDOWN_COUNT: &str = "Unsafe Shutdown Count";
pub const INITIAL_BAD_BLOCK_COUNT: &str = "Initial Bad Block Count";
pub const REMAINING_LIFE: &str = "Remaining Life";
pub const MEDIA_WEAROUT_INDICATOR: &str = "Media Wearout Indicator";
pub const PERCENT_LIFETIME_USED: &str = "Percent Lifetime Used";
pub const HOST_WRITES: &str = "Host Writes";
pub const HOST_READS: &str = "Host Reads";
pub const HOST_PROGRAM_PAGE_COUNT: &str = "Host Program NAND Pages Count";
pub const FTL_PROGRAM_PAGE_COUNT: &str = "FTL Program NAND Pages Count";
pub const CONTROLLER_WRITES_TO_NAND: &str = "Controller Writes to NAND";
pub const HOST_WRITES_TO_CONTROLLER: &str = "Host Writes to Controller";
pub const LIFETIME_WRITES: &str = "Lifetime Writes";
pub const LIFETIME_READS: &str = "Lifetime Reads";
pub const SECTORS_WRITTEN: &str = "Sectors Written";
pub const SECTORS_READ: &str = "Sectors Read";
pub const MAX_ERASE_COUNT: &str = "Max Erase Count";
pub const MIN_ERASE_COUNT: &str = "Min Erase Count";
pub const BAD_BLOCK_FULL_FLAG: &str = "Bad Block Full Flag";
pub const MAX_PE_COUNT_SPEC: &str = "Max P/E Count Spec";
pub const WRITE_AMPLIFICATION: &str = "Write Amplification";
