//! Value types and normalized values

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::NormalizationError;

/// Measurable quantity a component value describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    Capacitance,
    Resistance,
    Switch,
    Voltage,
    Current,
}

impl ValueType {
    pub const ALL: [ValueType; 5] = [
        ValueType::Capacitance,
        ValueType::Resistance,
        ValueType::Switch,
        ValueType::Voltage,
        ValueType::Current,
    ];

    /// Tag as stored alongside component types
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueType::Capacitance => "capacitance",
            ValueType::Resistance => "resistance",
            ValueType::Switch => "switch",
            ValueType::Voltage => "voltage",
            ValueType::Current => "current",
        }
    }

    /// Name of the unit `base_value` is expressed in
    pub fn base_unit(&self) -> &'static str {
        match self {
            ValueType::Capacitance => "farad",
            ValueType::Resistance => "ohm",
            ValueType::Switch => "configuration",
            ValueType::Voltage => "volt",
            ValueType::Current => "ampere",
        }
    }

    /// Whether a parser exists for this type
    pub fn is_supported(&self) -> bool {
        match self {
            ValueType::Capacitance | ValueType::Resistance | ValueType::Switch => true,
            ValueType::Voltage | ValueType::Current => false,
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ValueType {
    type Err = NormalizationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_lowercase();
        ValueType::ALL
            .into_iter()
            .find(|t| t.as_str() == tag)
            .ok_or_else(|| NormalizationError::UnknownValueType(s.trim().to_string()))
    }
}

/// Result of normalizing one raw value string.
///
/// `base_value` is in farads for capacitance and ohms for resistance. Switches
/// use the synthetic composite `poles * 10 + throws`, which is not a physical
/// quantity. `display_value` is derived from `base_value` and the type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedValue {
    base_value: f64,
    display_value: String,
    unit: &'static str,
    #[serde(rename = "type")]
    value_type: ValueType,
}

impl NormalizedValue {
    pub(crate) fn new(base_value: f64, display_value: String, value_type: ValueType) -> Self {
        Self {
            base_value,
            display_value,
            unit: value_type.base_unit(),
            value_type,
        }
    }

    pub fn base_value(&self) -> f64 {
        self.base_value
    }

    pub fn display_value(&self) -> &str {
        &self.display_value
    }

    /// SI unit name (`farad`, `ohm`) or `configuration` for switches
    pub fn unit(&self) -> &str {
        self.unit
    }

    pub fn value_type(&self) -> ValueType {
        self.value_type
    }
}

impl fmt::Display for NormalizedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_value)
    }
}
