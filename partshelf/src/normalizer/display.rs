//! Preferred-unit selection and display formatting
//!
//! The display string is always rebuilt from the base value, so a stored
//! `base_value` can be re-rendered without the original input.

use crate::core::NormalizationError;
use crate::normalizer::schema::ValueType;
use crate::registry::units::{
    UnitDefinition, FARAD, KILOOHM, MEGAOHM, MICROFARAD, MILLIFARAD, MILLIOHM, NANOFARAD, OHM,
    PICOFARAD,
};

/// How the scaled display number is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayPrecision {
    /// Round to this many significant digits, then print the shortest form
    Significant(u32),
    /// Print the scaled value exactly as computed
    Shortest,
}

impl Default for DisplayPrecision {
    fn default() -> Self {
        DisplayPrecision::Significant(12)
    }
}

impl DisplayPrecision {
    pub fn apply(&self, value: f64) -> f64 {
        match *self {
            DisplayPrecision::Significant(digits) => round_significant(value, digits),
            DisplayPrecision::Shortest => value,
        }
    }
}

/// Round to `digits` significant digits (clamped to 1..=17)
pub fn round_significant(value: f64, digits: u32) -> f64 {
    if value == 0.0 || !value.is_finite() {
        return value;
    }
    let digits = digits.clamp(1, 17) as usize;
    // scientific formatting rounds in decimal, which is what a reader sees
    format!("{:.*e}", digits - 1, value)
        .parse()
        .unwrap_or(value)
}

/// Capacitance ladder. Upper bounds are exclusive; first match wins.
pub fn preferred_capacitance_unit(base_value: f64) -> &'static UnitDefinition {
    if base_value < 1e-9 {
        &PICOFARAD
    } else if base_value < 1e-6 {
        &NANOFARAD
    } else if base_value < 1e-3 {
        &MICROFARAD
    } else if base_value < 1.0 {
        &MILLIFARAD
    } else {
        &FARAD
    }
}

/// Resistance ladder. Upper bounds are exclusive; first match wins.
pub fn preferred_resistance_unit(base_value: f64) -> &'static UnitDefinition {
    if base_value < 1.0 {
        &MILLIOHM
    } else if base_value < 1e3 {
        &OHM
    } else if base_value < 1e6 {
        &KILOOHM
    } else {
        &MEGAOHM
    }
}

/// `base_value` scaled into `unit`, followed by its preferred symbol
pub fn format_scaled(
    base_value: f64,
    unit: &UnitDefinition,
    precision: DisplayPrecision,
) -> String {
    let scaled = precision.apply(base_value / unit.multiplier);
    format!("{}{}", scaled, unit.preferred_symbol)
}

pub(crate) fn format_switch(poles: u32, throws: u32) -> String {
    format!("{}P{}T", poles, throws)
}

/// Rebuild the display string for a stored base value.
pub fn render_display(
    base_value: f64,
    value_type: ValueType,
    precision: DisplayPrecision,
) -> Result<String, NormalizationError> {
    let invalid = || NormalizationError::InvalidFormat {
        value_type,
        input: base_value.to_string(),
    };

    match value_type {
        ValueType::Capacitance => {
            if !base_value.is_finite() || base_value < 0.0 {
                return Err(invalid());
            }
            let unit = preferred_capacitance_unit(precision.apply(base_value));
            Ok(format_scaled(base_value, unit, precision))
        }
        ValueType::Resistance => {
            if !base_value.is_finite() || base_value < 0.0 {
                return Err(invalid());
            }
            let unit = preferred_resistance_unit(precision.apply(base_value));
            Ok(format_scaled(base_value, unit, precision))
        }
        ValueType::Switch => {
            let (poles, throws) = decode_switch(base_value).ok_or_else(|| {
                NormalizationError::InvalidSwitchConfiguration {
                    input: base_value.to_string(),
                }
            })?;
            Ok(format_switch(poles, throws))
        }
        ValueType::Voltage | ValueType::Current => {
            Err(NormalizationError::UnsupportedValueType(value_type))
        }
    }
}

/// Split `poles * 10 + throws` back into its parts
pub fn decode_switch(base_value: f64) -> Option<(u32, u32)> {
    if !base_value.is_finite() || base_value.fract() != 0.0 || base_value < 11.0 {
        return None;
    }
    if base_value > (u32::MAX as f64) * 10.0 + 9.0 {
        return None;
    }
    let code = base_value as u64;
    let poles = u32::try_from(code / 10).ok()?;
    let throws = (code % 10) as u32;
    if poles == 0 || throws == 0 {
        return None;
    }
    Some((poles, throws))
}
