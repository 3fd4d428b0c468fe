//! SMART Attribute Descriptors
//!
//! Describes how one SMART attribute of a device family is named, which
//! sensor (if any) it feeds, and how its raw record becomes a physical value.

use crate::domain::ports::{Parameter, RawAttributeRecord, SensorType};
use crate::hardware::smart::raw::{decode_signed, decode_unsigned32};

// =============================================================================
// Conversion Rules
// =============================================================================

/// Vendor-specific transform from a raw record and sensor parameters
pub type ConversionFn = fn(&RawAttributeRecord, &[f64]) -> f64;

/// Rule turning a raw attribute record into a physical value
#[derive(Clone, Copy)]
pub enum Conversion {
    /// No raw conversion, the normalized current value is reported
    Normalized,
    /// Unsigned 32-bit little-endian reconstruction of the raw bytes
    RawU32,
    /// Sign-extended reconstruction from the given number of raw bytes
    RawSigned(usize),
    /// Signed temperature plus the offset held in parameter 0
    Temperature { width: usize },
    /// Unsigned 32-bit raw value divided by a fixed unit size
    RawScaled { divisor: f64 },
    /// Vendor transform
    Custom(ConversionFn),
}

impl Conversion {
    /// Apply the rule. Missing parameters count as zero.
    pub fn apply(&self, record: &RawAttributeRecord, parameters: &[f64]) -> f64 {
        match *self {
            Conversion::Normalized => f64::from(record.current_value),
            Conversion::RawU32 => f64::from(decode_unsigned32(&record.raw_value)),
            Conversion::RawSigned(width) => f64::from(decode_signed(&record.raw_value, width)),
            Conversion::Temperature { width } => {
                let offset = parameters.first().copied().unwrap_or(0.0);
                f64::from(decode_signed(&record.raw_value, width)) + offset
            }
            Conversion::RawScaled { divisor } => {
                f64::from(decode_unsigned32(&record.raw_value)) / divisor
            }
            Conversion::Custom(convert) => convert(record, parameters),
        }
    }

    /// Whether the rule looks at the raw bytes at all
    pub fn is_raw(&self) -> bool {
        !matches!(self, Conversion::Normalized)
    }
}

impl std::fmt::Debug for Conversion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Conversion::Normalized => write!(f, "Normalized"),
            Conversion::RawU32 => write!(f, "RawU32"),
            Conversion::RawSigned(width) => write!(f, "RawSigned({})", width),
            Conversion::Temperature { width } => write!(f, "Temperature {{ width: {} }}", width),
            Conversion::RawScaled { divisor } => write!(f, "RawScaled {{ divisor: {} }}", divisor),
            Conversion::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

// =============================================================================
// Parameters and Bindings
// =============================================================================

/// Static description of a user-adjustable sensor parameter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterDescription {
    pub name: &'static str,
    pub description: &'static str,
    pub default: f64,
}

impl ParameterDescription {
    /// Instantiate the parameter, taking `value` when given
    pub fn instantiate(&self, value: Option<f64>) -> Parameter {
        Parameter {
            name: self.name.to_string(),
            description: self.description.to_string(),
            default: self.default,
            value: value.unwrap_or(self.default),
        }
    }
}

/// Calibration offset added to a raw temperature
pub const TEMPERATURE_OFFSET: ParameterDescription = ParameterDescription {
    name: "Offset [°C]",
    description: "Temperature offset of the thermal sensor.\nTemperature = Value + Offset.",
    default: 0.0,
};

pub const TEMPERATURE_PARAMETERS: &[ParameterDescription] = &[TEMPERATURE_OFFSET];

/// Which sensor slot an attribute feeds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SensorBinding {
    pub sensor_type: SensorType,
    pub channel: u32,
}

// =============================================================================
// SMART Attribute
// =============================================================================

/// Descriptor for one SMART attribute within a device family
#[derive(Debug, Clone)]
pub struct SmartAttribute {
    /// Attribute identifier
    pub identifier: u8,
    /// Display name, also used as the sensor name
    pub name: &'static str,
    /// Sensor slot fed by this attribute
    pub sensor: Option<SensorBinding>,
    /// Sensor name when it differs from the attribute name
    pub sensor_name: Option<&'static str>,
    /// Whether the sensor starts hidden
    pub default_hidden: bool,
    /// Raw-to-physical rule
    pub conversion: Conversion,
    /// Parameters of the sensor, in order
    pub parameters: &'static [ParameterDescription],
}

impl SmartAttribute {
    /// Report-only attribute that reports its normalized value
    pub const fn new(identifier: u8, name: &'static str) -> Self {
        Self {
            identifier,
            name,
            sensor: None,
            sensor_name: None,
            default_hidden: false,
            conversion: Conversion::Normalized,
            parameters: &[],
        }
    }

    pub fn with_conversion(mut self, conversion: Conversion) -> Self {
        self.conversion = conversion;
        self
    }

    pub fn with_sensor(mut self, sensor_type: SensorType, channel: u32) -> Self {
        self.sensor = Some(SensorBinding {
            sensor_type,
            channel,
        });
        self
    }

    pub fn with_sensor_name(mut self, sensor_name: &'static str) -> Self {
        self.sensor_name = Some(sensor_name);
        self
    }

    pub fn with_parameters(mut self, parameters: &'static [ParameterDescription]) -> Self {
        self.parameters = parameters;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.default_hidden = true;
        self
    }

    /// Name of the sensor fed by this attribute
    pub fn sensor_name(&self) -> &'static str {
        self.sensor_name.unwrap_or(self.name)
    }

    /// Convert a raw record using the given sensor parameter values
    pub fn convert(&self, record: &RawAttributeRecord, parameters: &[f64]) -> f64 {
        self.conversion.apply(record, parameters)
    }

    /// Whether a raw conversion rule is declared
    pub fn has_raw_conversion(&self) -> bool {
        self.conversion.is_raw()
    }

    /// Whether the attribute has a meaningful physical value
    pub fn has_physical_conversion(&self) -> bool {
        self.sensor.is_some() || self.has_raw_conversion()
    }
}
