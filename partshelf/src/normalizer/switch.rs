//! Switch configuration parsing ("spdt", "3P2T")
//!
//! The explicit `<poles>p<throws>t` form is tried before the named table.
//! Throws are limited to 1..=9 so that `poles * 10 + throws` can be decoded
//! again.

use lazy_static::lazy_static;
use regex::Regex;

use crate::core::NormalizationError;
use crate::normalizer::display::format_switch;
use crate::normalizer::schema::{NormalizedValue, ValueType};
use crate::registry::switches::resolve_switch_pattern;

lazy_static! {
    static ref EXPLICIT_SWITCH_PATTERN: Regex = Regex::new(r"^([0-9]+)p([0-9]+)t$").unwrap();
}

pub(crate) fn parse_switch(raw: &str) -> Result<NormalizedValue, NormalizationError> {
    let cleaned = super::clean_input(raw);
    let invalid = || NormalizationError::InvalidSwitchConfiguration {
        input: raw.to_string(),
    };

    let (poles, throws) = if let Some(caps) = EXPLICIT_SWITCH_PATTERN.captures(&cleaned) {
        let poles: u32 = caps[1].parse().map_err(|_| invalid())?;
        let throws: u32 = caps[2].parse().map_err(|_| invalid())?;
        (poles, throws)
    } else if let Some(pattern) = resolve_switch_pattern(&cleaned) {
        tracing::trace!("Matched named switch pattern {}", pattern.name);
        (pattern.poles, pattern.throws)
    } else {
        return Err(invalid());
    };

    if poles == 0 || !(1..=9).contains(&throws) {
        return Err(invalid());
    }

    let base_value = f64::from(poles) * 10.0 + f64::from(throws);
    Ok(NormalizedValue::new(
        base_value,
        format_switch(poles, throws),
        ValueType::Switch,
    ))
}
