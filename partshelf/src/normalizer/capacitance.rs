//! Capacitance parsing ("4.7uF", "100 nF", "22pf")

use lazy_static::lazy_static;
use regex::Regex;

use crate::core::NormalizationError;
use crate::normalizer::display::{format_scaled, preferred_capacitance_unit, DisplayPrecision};
use crate::normalizer::schema::{NormalizedValue, ValueType};
use crate::registry::units::CAPACITANCE_UNITS;

lazy_static! {
    /// Decimal number followed by a mandatory unit token
    static ref CAPACITANCE_PATTERN: Regex =
        Regex::new(r"^([0-9]*\.?[0-9]+)([a-zµμ]+)$").unwrap();
}

pub(crate) fn parse_capacitance(
    raw: &str,
    precision: DisplayPrecision,
) -> Result<NormalizedValue, NormalizationError> {
    let cleaned = super::clean_input(raw);
    let invalid_format = || NormalizationError::InvalidFormat {
        value_type: ValueType::Capacitance,
        input: raw.to_string(),
    };

    let caps = CAPACITANCE_PATTERN
        .captures(&cleaned)
        .ok_or_else(invalid_format)?;
    let value = super::parse_number(&caps[1]).ok_or_else(invalid_format)?;
    let unit_token = &caps[2];

    let unit = CAPACITANCE_UNITS
        .resolve(unit_token)
        .ok_or_else(|| NormalizationError::UnknownUnit {
            input: raw.to_string(),
            unit: unit_token.to_string(),
        })?;

    let base_value = value * unit.multiplier;
    let display_unit = preferred_capacitance_unit(precision.apply(base_value));
    let display_value = format_scaled(base_value, display_unit, precision);

    Ok(NormalizedValue::new(
        base_value,
        display_value,
        ValueType::Capacitance,
    ))
}
