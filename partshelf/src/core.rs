//! Core normalization API shared by the library and the CLI.
//! No I/O and no shared mutable state.

use crate::normalizer::display::DisplayPrecision;
use crate::normalizer::schema::{NormalizedValue, ValueType};
use crate::normalizer::{capacitance, resistance, switch};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NormalizationError {
    #[error("Unrecognized {value_type} format: {input:?}")]
    InvalidFormat { value_type: ValueType, input: String },
    #[error("Unknown capacitance unit {unit:?} in {input:?}")]
    UnknownUnit { input: String, unit: String },
    #[error(
        "Invalid switch configuration: {input:?} (expected a named pattern or \
         <poles>P<throws>T with at least 1 pole and 1 to 9 throws)"
    )]
    InvalidSwitchConfiguration { input: String },
    #[error("No parser for value type '{0}'")]
    UnsupportedValueType(ValueType),
    #[error("Unknown value type '{0}'")]
    UnknownValueType(String),
    #[error("Invalid range: minimum {min} exceeds maximum {max}")]
    InvalidRange { min: f64, max: f64 },
}

/// Fieldless view of [`NormalizationError`] for callers that only branch on the kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidFormat,
    UnknownUnit,
    InvalidSwitchConfiguration,
    UnsupportedValueType,
    UnknownValueType,
    InvalidRange,
}

impl NormalizationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            NormalizationError::InvalidFormat { .. } => ErrorKind::InvalidFormat,
            NormalizationError::UnknownUnit { .. } => ErrorKind::UnknownUnit,
            NormalizationError::InvalidSwitchConfiguration { .. } => {
                ErrorKind::InvalidSwitchConfiguration
            }
            NormalizationError::UnsupportedValueType(_) => ErrorKind::UnsupportedValueType,
            NormalizationError::UnknownValueType(_) => ErrorKind::UnknownValueType,
            NormalizationError::InvalidRange { .. } => ErrorKind::InvalidRange,
        }
    }
}

/// Options for normalization runs (library or CLI).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NormalizeOptions {
    pub display_precision: DisplayPrecision,
}

/// Normalizes raw component value strings.
///
/// Holds only options; cheap to copy and safe to share between threads.
#[derive(Clone, Copy, Debug, Default)]
pub struct ValueNormalizer {
    options: NormalizeOptions,
}

impl ValueNormalizer {
    pub fn new(options: NormalizeOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &NormalizeOptions {
        &self.options
    }

    /// Parse `raw` as a value of `value_type`.
    pub fn normalize(
        &self,
        raw: &str,
        value_type: ValueType,
    ) -> Result<NormalizedValue, NormalizationError> {
        tracing::debug!("Normalizing {:?} as {}", raw, value_type);

        let precision = self.options.display_precision;
        match value_type {
            ValueType::Capacitance => capacitance::parse_capacitance(raw, precision),
            ValueType::Resistance => resistance::parse_resistance(raw, precision),
            ValueType::Switch => switch::parse_switch(raw),
            ValueType::Voltage | ValueType::Current => {
                Err(NormalizationError::UnsupportedValueType(value_type))
            }
        }
    }

    /// Normalize a component's value when its type carries a value type.
    ///
    /// Returns `Ok(None)` when there is nothing to normalize: the component
    /// type has no value type, or the raw value is missing or blank.
    pub fn normalize_component_value(
        &self,
        raw: Option<&str>,
        value_type: Option<ValueType>,
    ) -> Result<Option<NormalizedValue>, NormalizationError> {
        match (raw, value_type) {
            (Some(raw), Some(value_type)) if !raw.trim().is_empty() => {
                self.normalize(raw, value_type).map(Some)
            }
            _ => Ok(None),
        }
    }
}

/// Normalize with default options (convenience wrapper).
pub fn normalize(raw: &str, value_type: ValueType) -> Result<NormalizedValue, NormalizationError> {
    ValueNormalizer::default().normalize(raw, value_type)
}

/// [`ValueNormalizer::normalize_component_value`] with default options.
pub fn normalize_component_value(
    raw: Option<&str>,
    value_type: Option<ValueType>,
) -> Result<Option<NormalizedValue>, NormalizationError> {
    ValueNormalizer::default().normalize_component_value(raw, value_type)
}
