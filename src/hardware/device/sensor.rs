//! Drive Sensors and Bindings
//!
//! Sensors created for one drive, the catalog-position bindings used to
//! route updates, and the claim set that keeps every `(type, channel)` slot
//! to a single sensor.

use crate::config::ParameterOverrides;
use crate::domain::ports::{SensorDefinition, SensorId, SensorRegistry, SensorType};
use crate::hardware::smart::attribute::{ParameterDescription, SensorBinding};
use indexmap::IndexSet;
use tracing::debug;

// =============================================================================
// Sensor
// =============================================================================

/// A sensor created for a drive, with its latest value
#[derive(Debug, Clone, PartialEq)]
pub struct Sensor {
    definition: SensorDefinition,
    value: Option<f64>,
}

impl Sensor {
    /// Create a sensor, applying parameter overrides keyed by its identifier
    pub fn new(
        drive_index: u32,
        name: &str,
        binding: SensorBinding,
        default_hidden: bool,
        parameters: &[ParameterDescription],
        overrides: &ParameterOverrides,
    ) -> Self {
        let id = SensorId::new(drive_index, binding.sensor_type, binding.channel);
        let values = overrides.get(id.as_str());
        let parameters = parameters
            .iter()
            .enumerate()
            .map(|(i, p)| p.instantiate(values.and_then(|v| v.get(i).copied())))
            .collect();

        Self {
            definition: SensorDefinition {
                id,
                name: name.to_string(),
                sensor_type: binding.sensor_type,
                channel: binding.channel,
                default_hidden,
                parameters,
            },
            value: None,
        }
    }

    pub fn id(&self) -> &SensorId {
        &self.definition.id
    }

    pub fn name(&self) -> &str {
        &self.definition.name
    }

    pub fn binding(&self) -> SensorBinding {
        SensorBinding {
            sensor_type: self.definition.sensor_type,
            channel: self.definition.channel,
        }
    }

    pub fn definition(&self) -> &SensorDefinition {
        &self.definition
    }

    /// Current parameter values, in declaration order
    pub fn parameter_values(&self) -> Vec<f64> {
        self.definition.parameters.iter().map(|p| p.value).collect()
    }

    /// Latest value, `None` until the first successful update
    pub fn value(&self) -> Option<f64> {
        self.value
    }

    pub fn set_value(&mut self, value: f64) {
        self.value = Some(value);
    }
}

// =============================================================================
// Sensor Bindings
// =============================================================================

/// Sensors of one drive: catalog-bound ones in catalog order, then the
/// family-published ones in publication order
#[derive(Debug, Default)]
pub struct SensorBindings {
    /// (catalog position, sensor)
    bound: Vec<(usize, Sensor)>,
    /// Sensors published by the family behaviour
    additional: Vec<Sensor>,
    /// Every claimed (type, channel) slot
    claimed: IndexSet<SensorBinding>,
}

impl SensorBindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim a slot; `false` if it already belongs to another sensor
    pub fn claim(&mut self, binding: SensorBinding) -> bool {
        self.claimed.insert(binding)
    }

    pub fn is_claimed(&self, binding: &SensorBinding) -> bool {
        self.claimed.contains(binding)
    }

    /// Record the sensor created for a catalog position
    pub fn bind(&mut self, position: usize, sensor: Sensor) {
        self.bound.push((position, sensor));
    }

    /// Catalog-bound sensors with their catalog positions
    pub fn bound(&self) -> impl Iterator<Item = (usize, &Sensor)> {
        self.bound.iter().map(|(position, sensor)| (*position, sensor))
    }

    pub(crate) fn bound_mut(&mut self) -> impl Iterator<Item = (usize, &mut Sensor)> {
        self.bound.iter_mut().map(|(position, sensor)| (*position, sensor))
    }

    /// Sensors published by the family behaviour
    pub fn additional(&self) -> &[Sensor] {
        &self.additional
    }

    /// All sensors, catalog-bound first
    pub fn sensors(&self) -> impl Iterator<Item = &Sensor> {
        self.bound.iter().map(|(_, s)| s).chain(self.additional.iter())
    }

    pub fn get(&self, id: &SensorId) -> Option<&Sensor> {
        self.sensors().find(|s| s.id() == id)
    }

    pub fn len(&self) -> usize {
        self.bound.len() + self.additional.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Claimed slots in claim order
    pub fn claimed(&self) -> impl Iterator<Item = &SensorBinding> {
        self.claimed.iter()
    }
}

// =============================================================================
// Additional Sensors
// =============================================================================

/// Handle given to family behaviours to publish derived sensors
pub struct AdditionalSensors<'a> {
    drive_index: u32,
    bindings: &'a mut SensorBindings,
    registry: &'a dyn SensorRegistry,
    overrides: &'a ParameterOverrides,
}

impl<'a> AdditionalSensors<'a> {
    pub fn new(
        drive_index: u32,
        bindings: &'a mut SensorBindings,
        registry: &'a dyn SensorRegistry,
        overrides: &'a ParameterOverrides,
    ) -> Self {
        Self {
            drive_index,
            bindings,
            registry,
            overrides,
        }
    }

    /// Set a derived sensor's value, creating the sensor on first use.
    ///
    /// Returns `false` when the slot is already held by a catalog sensor.
    pub fn publish(&mut self, name: &str, sensor_type: SensorType, channel: u32, value: f64) -> bool {
        let binding = SensorBinding {
            sensor_type,
            channel,
        };

        let position = match self
            .bindings
            .additional
            .iter()
            .position(|s| s.binding() == binding)
        {
            Some(position) => position,
            None => {
                if !self.bindings.claim(binding) {
                    debug!(
                        sensor = name,
                        sensor_type = %sensor_type,
                        channel,
                        "Slot already claimed, derived sensor not published"
                    );
                    return false;
                }
                let sensor = Sensor::new(self.drive_index, name, binding, false, &[], self.overrides);
                self.registry.register(sensor.definition());
                self.bindings.additional.push(sensor);
                self.bindings.additional.len() - 1
            }
        };

        let sensor = &mut self.bindings.additional[position];
        sensor.set_value(value);
        self.registry.update(sensor.id(), value);
        true
    }
}
