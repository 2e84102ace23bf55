//! Resistance parsing ("10k", "4.7 MΩ", "220")
//!
//! A bare number is ohms, and an unrecognised unit token falls back to ohms
//! instead of failing.

use lazy_static::lazy_static;
use regex::Regex;

use crate::core::NormalizationError;
use crate::normalizer::display::{format_scaled, preferred_resistance_unit, DisplayPrecision};
use crate::normalizer::schema::{NormalizedValue, ValueType};
use crate::registry::units::{UnitDefinition, MEGAOHM, RESISTANCE_UNITS};

lazy_static! {
    /// Decimal number followed by an optional unit token. Case-insensitive so
    /// the token keeps its original case for the mega check.
    static ref RESISTANCE_PATTERN: Regex =
        Regex::new(r"(?i)^([0-9]*\.?[0-9]+)([a-zω]*)$").unwrap();
}

pub(crate) fn parse_resistance(
    raw: &str,
    precision: DisplayPrecision,
) -> Result<NormalizedValue, NormalizationError> {
    let cleaned: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    let invalid_format = || NormalizationError::InvalidFormat {
        value_type: ValueType::Resistance,
        input: raw.to_string(),
    };

    let caps = RESISTANCE_PATTERN
        .captures(&cleaned)
        .ok_or_else(invalid_format)?;
    let value = super::parse_number(&caps[1]).ok_or_else(invalid_format)?;
    let unit = resolve_resistance_unit(&caps[2]);

    let base_value = value * unit.multiplier;
    let display_unit = preferred_resistance_unit(precision.apply(base_value));
    let display_value = format_scaled(base_value, display_unit, precision);

    Ok(NormalizedValue::new(
        base_value,
        display_value,
        ValueType::Resistance,
    ))
}

fn resolve_resistance_unit(token: &str) -> &'static UnitDefinition {
    let spelled_milli = token.to_lowercase().starts_with("milli");
    if token.starts_with('M') && !spelled_milli {
        tracing::trace!("Uppercase M in {:?} read as mega", token);
        return &MEGAOHM;
    }

    match RESISTANCE_UNITS.resolve(token) {
        Some(unit) => unit,
        None => {
            tracing::debug!("Unrecognised resistance unit {:?}, using ohms", token);
            RESISTANCE_UNITS.base()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> Result<NormalizedValue, NormalizationError> {
        parse_resistance(raw, DisplayPrecision::default())
    }

    #[test]
    fn test_parse_resistor_values() {
        assert!((parse("10k").unwrap().base_value() - 10_000.0).abs() < 1e-9);
        assert!((parse("4.7k").unwrap().base_value() - 4_700.0).abs() < 1e-9);
        assert!((parse("100").unwrap().base_value() - 100.0).abs() < 1e-9);
        assert!((parse("1M").unwrap().base_value() - 1_000_000.0).abs() < 1e-6);
        assert!((parse("50m").unwrap().base_value() - 0.05).abs() < 1e-12);
    }

    #[test]
    fn test_bare_number_is_ohms() {
        let value = parse("220").unwrap();
        assert_eq!(value.base_value(), 220.0);
        assert_eq!(value.display_value(), "220Ω");
        assert_eq!(value.unit(), "ohm");
        assert_eq!(value.value_type(), ValueType::Resistance);
    }

    #[test]
    fn test_mega_and_milli_are_distinct() {
        assert_eq!(parse("2.2M").unwrap().display_value(), "2.2MΩ");
        assert_eq!(parse("2.2MΩ").unwrap().display_value(), "2.2MΩ");
        assert_eq!(parse("2.2meg").unwrap().display_value(), "2.2MΩ");
        assert_eq!(parse("2.2MEG").unwrap().display_value(), "2.2MΩ");
        assert_eq!(parse("2.2m").unwrap().display_value(), "2.2mΩ");
        assert_eq!(parse("2.2mΩ").unwrap().display_value(), "2.2mΩ");
        assert_eq!(parse("2.2mohm").unwrap().display_value(), "2.2mΩ");
    }

    #[test]
    fn test_spelled_out_units() {
        assert_eq!(parse("470 ohms").unwrap().display_value(), "470Ω");
        assert_eq!(parse("470ohm").unwrap().display_value(), "470Ω");
        assert_eq!(parse("470R").unwrap().display_value(), "470Ω");
        assert_eq!(parse("10 kOhm").unwrap().display_value(), "10kΩ");
        assert_eq!(parse("10K").unwrap().display_value(), "10kΩ");
    }

    #[test]
    fn test_spelled_out_prefixes() {
        assert!((parse("4.7kilohm").unwrap().base_value() - 4_700.0).abs() < 1e-9);
        assert_eq!(parse("4.7 kiloohms").unwrap().display_value(), "4.7kΩ");
        assert_eq!(parse("2.2megaohm").unwrap().display_value(), "2.2MΩ");
        assert_eq!(parse("2.2 Megaohms").unwrap().display_value(), "2.2MΩ");
        assert_eq!(parse("50milliohm").unwrap().display_value(), "50mΩ");
        assert_eq!(parse("50 Milliohms").unwrap().display_value(), "50mΩ");
    }

    #[test]
    fn test_equal_length_aliases_read_left_to_right() {
        let value = parse("10 km").unwrap();
        assert_eq!(value.base_value(), 10_000.0);
        assert_eq!(value.display_value(), "10kΩ");
    }

    #[test]
    fn test_unknown_unit_falls_back_to_ohms() {
        let value = parse("47xyz").unwrap();
        assert_eq!(value.base_value(), 47.0);
        assert_eq!(value.display_value(), "47Ω");
    }

    #[test]
    fn test_display_ladder() {
        assert_eq!(parse("0.5").unwrap().display_value(), "500mΩ");
        assert_eq!(parse("1000").unwrap().display_value(), "1kΩ");
        assert_eq!(parse("999").unwrap().display_value(), "999Ω");
        assert_eq!(parse("1000k").unwrap().display_value(), "1MΩ");
    }

    #[test]
    fn test_invalid_format() {
        for raw in ["", "abc", "k10", "1.2.3k", "-10k", "10k5", "10%"] {
            let err = parse(raw).unwrap_err();
            assert!(
                matches!(err, NormalizationError::InvalidFormat { .. }),
                "{:?} gave {:?}",
                raw,
                err
            );
        }
    }
}
