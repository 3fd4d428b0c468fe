//! Built-in Device Families
//!
//! The compiled-in profile table for ATA drives. Entries are listed from
//! most to least specific; the generic hard disk must stay last because it
//! accepts every drive.

pub mod hdd;
pub mod ssd;

use crate::hardware::classification::profile::DeviceProfile;

/// Built-in profiles in precedence order
pub fn builtin_profiles() -> Vec<DeviceProfile> {
    vec![
        ssd::plextor(),
        ssd::intel(),
        ssd::sandforce(),
        ssd::indilinx(),
        ssd::samsung(),
        ssd::micron(),
        hdd::samsung(),
        hdd::generic(),
    ]
}
