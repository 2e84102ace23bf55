//! Value range filtering over normalized base values.
//!
//! Range bounds are typed the same way values are ("1k" .. "10k") and go
//! through the same normalizer, so a range and the values it filters always
//! share one base unit.

use serde::Serialize;

use crate::core::{NormalizationError, ValueNormalizer};
use crate::normalizer::schema::{NormalizedValue, ValueType};

/// Inclusive range of base values for one value type. Either bound may be open.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ValueRange {
    pub value_type: ValueType,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl ValueRange {
    /// Build a range from base values
    pub fn new(
        value_type: ValueType,
        min: Option<f64>,
        max: Option<f64>,
    ) -> Result<Self, NormalizationError> {
        if let (Some(min), Some(max)) = (min, max) {
            if min > max {
                return Err(NormalizationError::InvalidRange { min, max });
            }
        }
        Ok(Self {
            value_type,
            min,
            max,
        })
    }

    /// Build a range from user-entered bounds. Blank or missing bounds are open.
    pub fn parse(
        normalizer: &ValueNormalizer,
        value_type: ValueType,
        min: Option<&str>,
        max: Option<&str>,
    ) -> Result<Self, NormalizationError> {
        let bound = |raw: Option<&str>| -> Result<Option<f64>, NormalizationError> {
            Ok(normalizer
                .normalize_component_value(raw, Some(value_type))?
                .map(|value| value.base_value()))
        };
        Self::new(value_type, bound(min)?, bound(max)?)
    }

    /// Whether the range puts no constraint on base values
    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    /// Type must match; bounds are inclusive.
    pub fn contains(&self, value: &NormalizedValue) -> bool {
        if value.value_type() != self.value_type {
            return false;
        }
        let base = value.base_value();
        self.min.map_or(true, |min| base >= min) && self.max.map_or(true, |max| base <= max)
    }

    /// Keep only the values inside the range
    pub fn filter<'a, I>(&'a self, values: I) -> impl Iterator<Item = &'a NormalizedValue> + 'a
    where
        I: IntoIterator<Item = &'a NormalizedValue>,
        I::IntoIter: 'a,
    {
        values.into_iter().filter(move |value| self.contains(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::normalize;

    fn resistor(raw: &str) -> NormalizedValue {
        normalize(raw, ValueType::Resistance).unwrap()
    }

    #[test]
    fn test_parse_bounds_through_normalizer() {
        let range = ValueRange::parse(
            &ValueNormalizer::default(),
            ValueType::Resistance,
            Some("1k"),
            Some("10k"),
        )
        .unwrap();
        assert_eq!(range.min, Some(1_000.0));
        assert_eq!(range.max, Some(10_000.0));
    }

    #[test]
    fn test_contains_is_inclusive() {
        let range = ValueRange::new(ValueType::Resistance, Some(1_000.0), Some(10_000.0)).unwrap();
        assert!(range.contains(&resistor("1k")));
        assert!(range.contains(&resistor("4.7k")));
        assert!(range.contains(&resistor("10k")));
        assert!(!range.contains(&resistor("220")));
        assert!(!range.contains(&resistor("1M")));
    }

    #[test]
    fn test_type_mismatch_never_matches() {
        let range = ValueRange::new(ValueType::Capacitance, None, None).unwrap();
        assert!(range.is_unbounded());
        assert!(!range.contains(&resistor("10k")));
    }

    #[test]
    fn test_open_bounds() {
        let normalizer = ValueNormalizer::default();
        let at_least =
            ValueRange::parse(&normalizer, ValueType::Resistance, Some("1k"), Some("")).unwrap();
        assert_eq!(at_least.max, None);
        assert!(at_least.contains(&resistor("10M")));

        let at_most =
            ValueRange::parse(&normalizer, ValueType::Resistance, None, Some("100")).unwrap();
        assert!(at_most.contains(&resistor("0.1")));
        assert!(!at_most.contains(&resistor("101")));
    }

    #[test]
    fn test_inverted_range_is_rejected() {
        let err = ValueRange::parse(
            &ValueNormalizer::default(),
            ValueType::Resistance,
            Some("10k"),
            Some("1k"),
        )
        .unwrap_err();
        assert_eq!(
            err,
            NormalizationError::InvalidRange {
                min: 10_000.0,
                max: 1_000.0
            }
        );
    }

    #[test]
    fn test_bad_bound_is_reported() {
        let err = ValueRange::parse(
            &ValueNormalizer::default(),
            ValueType::Capacitance,
            Some("10xyz"),
            None,
        )
        .unwrap_err();
        assert!(matches!(err, NormalizationError::UnknownUnit { .. }));
    }

    #[test]
    fn test_filter() {
        let values: Vec<_> = ["100", "1k", "4.7k", "100k"].iter().map(|r| resistor(r)).collect();
        let range = ValueRange::new(ValueType::Resistance, Some(500.0), Some(5_000.0)).unwrap();
        let kept: Vec<_> = range.filter(&values).map(|v| v.display_value()).collect();
        assert_eq!(kept, vec!["1kΩ", "4.7kΩ"]);
    }
}
