//! Value Normalizer
//!
//! Turns hand-typed component values into a canonical base value and a
//! display string.
//!
//! # Pipeline
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌──────────────┐
//! │  raw string  │───▶│   ValueType  │───▶│ type parser  │
//! │ + value type │    │   dispatch   │    │ (cap/res/sw) │
//! └──────────────┘    └──────────────┘    └──────┬───────┘
//!                                                │
//!                                                ▼
//!                                        ┌──────────────┐
//!                                        │  unit table  │
//!                                        │  / patterns  │
//!                                        └──────┬───────┘
//!                                               │
//!                                               ▼
//!                                       ┌──────────────┐
//!                                       │ base value + │
//!                                       │ display unit │
//!                                       └──────────────┘
//! ```
//!
//! # Supported types
//!
//! 1. **Capacitance** - farads, `pF` to `F`
//! 2. **Resistance** - ohms, `mΩ` to `MΩ`, bare numbers are ohms
//! 3. **Switch** - `spst`, `spdt`, `dpst`, `dpdt`, `3pdt`, `4pdt`, or `<n>p<n>t`
//!
//! Voltage and current are declared but have no parser yet.

pub mod capacitance;
pub mod display;
pub mod resistance;
pub mod schema;
pub mod switch;

// Re-exports for convenience
pub use display::{render_display, DisplayPrecision};
pub use schema::{NormalizedValue, ValueType};

/// Lowercase and drop all whitespace
pub(crate) fn clean_input(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Parse the numeric part matched by a value pattern; rejects overflow to infinity
pub(crate) fn parse_number(digits: &str) -> Option<f64> {
    digits.parse::<f64>().ok().filter(|v| v.is_finite())
}
