//! Partshelf - component value normalization for electronics inventories
//!
//! This library turns hand-typed component values such as `4.7uF`, `10k` or
//! `spdt` into a canonical base value (farads, ohms, or a pole/throw code)
//! plus a standardized display string, so stored values can be compared and
//! searched by range.
//!
//! # Quick Start
//!
//! ```
//! use partshelf::{normalize, ValueType};
//!
//! let value = normalize("4700pF", ValueType::Capacitance).unwrap();
//! assert_eq!(value.display_value(), "4.7nF");
//! assert_eq!(value.unit(), "farad");
//!
//! let value = normalize("220", ValueType::Resistance).unwrap();
//! assert_eq!(value.display_value(), "220Ω");
//! ```
//!
//! # Features
//!
//! - **Unit tables**: alias lookup for capacitance and resistance prefixes
//! - **Switch patterns**: named and explicit pole/throw configurations
//! - **Display rendering**: magnitude-dependent preferred units
//! - **Range search**: inclusive base-value ranges built from typed bounds

pub mod core;
pub mod normalizer;
pub mod registry;
pub mod search;

// Re-export main types
pub use crate::core::{
    normalize, normalize_component_value, ErrorKind, NormalizationError, NormalizeOptions,
    ValueNormalizer,
};
pub use normalizer::{render_display, DisplayPrecision, NormalizedValue, ValueType};
pub use registry::{
    capacitance_units, resistance_units, switch_patterns, SwitchPattern, UnitDefinition, UnitTable,
};
pub use search::ValueRange;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        normalize, DisplayPrecision, ErrorKind, NormalizationError, NormalizeOptions,
        NormalizedValue, ValueNormalizer, ValueRange, ValueType,
    };
}
