//! Static lookup tables used by the normalizer.
//!
//! Everything here is plain `static` data, built at compile time and never
//! written afterwards, so it can be read from any number of threads.

pub mod switches;
pub mod units;

// Re-exports for convenience
pub use switches::{resolve_switch_pattern, switch_patterns, SwitchPattern, SWITCH_PATTERNS};
pub use units::{
    capacitance_units, resistance_units, AliasMatch, UnitDefinition, UnitTable,
    CAPACITANCE_UNITS, RESISTANCE_UNITS,
};
