//! Registry Events
//!
//! Events emitted by the sensor registry for external consumers to react to
//! sensor creation and new readings.

use crate::domain::ports::{SensorId, SensorType};
use serde::{Deserialize, Serialize};

/// Events emitted by the sensor registry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum RegistryEvent {
    /// A drive announced a new sensor
    SensorRegistered {
        id: SensorId,
        name: String,
        sensor_type: SensorType,
        hidden: bool,
    },

    /// A sensor received a new value
    SensorUpdated { id: SensorId, value: f64 },

    /// A value arrived for a sensor that was never registered
    UnknownSensor { id: SensorId },
}

impl RegistryEvent {
    /// Sensor the event refers to
    pub fn sensor_id(&self) -> &SensorId {
        match self {
            RegistryEvent::SensorRegistered { id, .. }
            | RegistryEvent::SensorUpdated { id, .. }
            | RegistryEvent::UnknownSensor { id } => id,
        }
    }
}
