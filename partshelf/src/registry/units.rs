//! Unit Tables
//!
//! Static alias tables for each measurable quantity. Every entry maps a set of
//! lowercase alias symbols to a multiplier into the SI base unit and the symbol
//! used when rendering a display value.
//!
//! # Matching
//!
//! A candidate unit token matches a definition when the (lowercased,
//! whitespace-free) token *contains* one of its aliases. When more than one
//! definition matches, the one whose matching alias is longest wins. Between
//! equally long aliases the one found earlier in the token wins (`km` is kilo),
//! then table order. The empty alias only matches an empty token.
//!
//! Spelled-out prefixes (`kiloohm`, `microfarad`) carry their own aliases so
//! that the prefix outranks the unit word it is glued to.
//!
//! # Resistance "m"
//!
//! Lowercase `m` is milli. Mega is written `meg`/`mega` (any case) or with a
//! token starting with an uppercase `M` (`M`, `MΩ`, `Mohm`). `Milli...`
//! spelled out stays milli. The uppercase check
//! happens in the resistance parser before the token is lowercased, because
//! this table only ever sees lowercase text.

use serde::Serialize;

/// One unit prefix of a quantity
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnitDefinition {
    /// Tier name (`pico`, `kilo`, `base`, ...)
    pub name: &'static str,
    /// Accepted lowercase aliases
    pub symbols: &'static [&'static str],
    /// `value × multiplier` gives the value in the base unit
    pub multiplier: f64,
    /// Symbol used when rendering
    pub preferred_symbol: &'static str,
}

/// How well a definition matched a token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AliasMatch {
    /// Alias length in chars
    pub len: usize,
    /// Byte offset of the alias in the token
    pub position: usize,
}

impl AliasMatch {
    fn beats(&self, other: &AliasMatch) -> bool {
        self.len > other.len || (self.len == other.len && self.position < other.position)
    }
}

impl UnitDefinition {
    /// Best alias of this definition contained in `candidate`.
    ///
    /// `candidate` must already be lowercased and whitespace-free.
    pub fn match_alias(&self, candidate: &str) -> Option<AliasMatch> {
        let mut best: Option<AliasMatch> = None;
        for symbol in self.symbols {
            let position = if symbol.is_empty() {
                candidate.is_empty().then_some(0)
            } else {
                candidate.find(*symbol)
            };
            if let Some(position) = position {
                let found = AliasMatch {
                    len: symbol.chars().count(),
                    position,
                };
                if best.map_or(true, |b| found.beats(&b)) {
                    best = Some(found);
                }
            }
        }
        best
    }

    /// Length (in chars) of the best alias contained in `candidate`
    pub fn matched_alias_len(&self, candidate: &str) -> Option<usize> {
        self.match_alias(candidate).map(|m| m.len)
    }
}

/// Ordered set of unit definitions for one quantity
#[derive(Debug, Serialize)]
pub struct UnitTable {
    pub quantity: &'static str,
    pub definitions: &'static [&'static UnitDefinition],
}

impl UnitTable {
    /// Resolve a unit token against this table
    pub fn resolve(&self, candidate: &str) -> Option<&'static UnitDefinition> {
        let candidate = clean_token(candidate);

        let mut best: Option<(&'static UnitDefinition, AliasMatch)> = None;
        for definition in self.definitions {
            if let Some(found) = definition.match_alias(&candidate) {
                // full ties keep the earlier definition
                if best.map_or(true, |(_, b)| found.beats(&b)) {
                    best = Some((*definition, found));
                }
            }
        }

        if let Some((definition, _)) = best {
            tracing::trace!(
                "Resolved {} unit {:?} to {}",
                self.quantity,
                candidate,
                definition.name
            );
        }

        best.map(|(definition, _)| definition)
    }

    /// Find a definition by tier name
    pub fn get(&self, name: &str) -> Option<&'static UnitDefinition> {
        self.definitions.iter().copied().find(|d| d.name == name)
    }

    /// Definition with multiplier 1
    pub fn base(&self) -> &'static UnitDefinition {
        self.definitions
            .iter()
            .copied()
            .find(|d| d.multiplier == 1.0)
            .unwrap_or(self.definitions[0])
    }
}

fn clean_token(token: &str) -> String {
    token
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

// Capacitance

pub static PICOFARAD: UnitDefinition = UnitDefinition {
    name: "pico",
    symbols: &["p", "pf", "pico", "picofarad"],
    multiplier: 1e-12,
    preferred_symbol: "pF",
};

pub static NANOFARAD: UnitDefinition = UnitDefinition {
    name: "nano",
    symbols: &["n", "nf", "nano", "nanofarad"],
    multiplier: 1e-9,
    preferred_symbol: "nF",
};

// µ is U+00B5 (micro sign), μ is U+03BC (greek mu); both show up in BOMs
pub static MICROFARAD: UnitDefinition = UnitDefinition {
    name: "micro",
    symbols: &["u", "µ", "μ", "uf", "µf", "μf", "micro", "microfarad"],
    multiplier: 1e-6,
    preferred_symbol: "µF",
};

pub static MILLIFARAD: UnitDefinition = UnitDefinition {
    name: "milli",
    symbols: &["m", "mf", "milli", "millifarad"],
    multiplier: 1e-3,
    preferred_symbol: "mF",
};

pub static FARAD: UnitDefinition = UnitDefinition {
    name: "base",
    symbols: &["f", "farad"],
    multiplier: 1.0,
    preferred_symbol: "F",
};

pub static CAPACITANCE_UNITS: UnitTable = UnitTable {
    quantity: "capacitance",
    definitions: &[&PICOFARAD, &NANOFARAD, &MICROFARAD, &MILLIFARAD, &FARAD],
};

// Resistance

pub static MILLIOHM: UnitDefinition = UnitDefinition {
    name: "milli",
    symbols: &["m", "mω", "mohm", "mohms", "milli", "milliohm", "milliohms"],
    multiplier: 1e-3,
    preferred_symbol: "mΩ",
};

pub static OHM: UnitDefinition = UnitDefinition {
    name: "base",
    symbols: &["r", "ω", "ohm", "ohms", ""],
    multiplier: 1.0,
    preferred_symbol: "Ω",
};

pub static KILOOHM: UnitDefinition = UnitDefinition {
    name: "kilo",
    symbols: &["k", "kω", "kohm", "kohms", "kilo", "kilohm", "kilohms", "kiloohm", "kiloohms"],
    multiplier: 1e3,
    preferred_symbol: "kΩ",
};

/// Never reached through plain `m`; see the module docs.
pub static MEGAOHM: UnitDefinition = UnitDefinition {
    name: "mega",
    symbols: &["meg", "megω", "megohm", "megohms", "mega", "megaohm", "megaohms"],
    multiplier: 1e6,
    preferred_symbol: "MΩ",
};

pub static RESISTANCE_UNITS: UnitTable = UnitTable {
    quantity: "resistance",
    definitions: &[&MILLIOHM, &OHM, &KILOOHM, &MEGAOHM],
};

/// Capacitance table in resolution order
pub fn capacitance_units() -> &'static UnitTable {
    &CAPACITANCE_UNITS
}

/// Resistance table in resolution order
pub fn resistance_units() -> &'static UnitTable {
    &RESISTANCE_UNITS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacitance_aliases() {
        assert_eq!(CAPACITANCE_UNITS.resolve("pf").unwrap().name, "pico");
        assert_eq!(CAPACITANCE_UNITS.resolve("nF").unwrap().name, "nano");
        assert_eq!(CAPACITANCE_UNITS.resolve("uF").unwrap().name, "micro");
        assert_eq!(CAPACITANCE_UNITS.resolve("µF").unwrap().name, "micro");
        assert_eq!(CAPACITANCE_UNITS.resolve("μ").unwrap().name, "micro");
        assert_eq!(CAPACITANCE_UNITS.resolve("mf").unwrap().name, "milli");
        assert_eq!(CAPACITANCE_UNITS.resolve("F").unwrap().name, "base");
        assert!(CAPACITANCE_UNITS.resolve("xyz").is_none());
        assert!(CAPACITANCE_UNITS.resolve("").is_none());
    }

    #[test]
    fn test_contains_matching() {
        // plural / spelled-out suffixes still resolve through the contained alias
        assert_eq!(CAPACITANCE_UNITS.resolve("pfs").unwrap().name, "pico");
        assert_eq!(CAPACITANCE_UNITS.resolve("farad").unwrap().name, "base");
        assert_eq!(CAPACITANCE_UNITS.resolve(" U F ").unwrap().name, "micro");
    }

    #[test]
    fn test_resistance_longest_alias_wins() {
        assert_eq!(RESISTANCE_UNITS.resolve("ohms").unwrap().name, "base");
        assert_eq!(RESISTANCE_UNITS.resolve("ohm").unwrap().name, "base");
        assert_eq!(RESISTANCE_UNITS.resolve("mohm").unwrap().name, "milli");
        assert_eq!(RESISTANCE_UNITS.resolve("mΩ").unwrap().name, "milli");
        assert_eq!(RESISTANCE_UNITS.resolve("kohms").unwrap().name, "kilo");
        assert_eq!(RESISTANCE_UNITS.resolve("kΩ").unwrap().name, "kilo");
        assert_eq!(RESISTANCE_UNITS.resolve("meg").unwrap().name, "mega");
        assert_eq!(RESISTANCE_UNITS.resolve("megohm").unwrap().name, "mega");
    }

    #[test]
    fn test_spelled_out_prefixes() {
        assert_eq!(RESISTANCE_UNITS.resolve("kilohm").unwrap().name, "kilo");
        assert_eq!(RESISTANCE_UNITS.resolve("kiloohms").unwrap().name, "kilo");
        assert_eq!(RESISTANCE_UNITS.resolve("megaohm").unwrap().name, "mega");
        assert_eq!(RESISTANCE_UNITS.resolve("milliohms").unwrap().name, "milli");
        assert_eq!(CAPACITANCE_UNITS.resolve("picofarads").unwrap().name, "pico");
        assert_eq!(CAPACITANCE_UNITS.resolve("nanofarad").unwrap().name, "nano");
        assert_eq!(CAPACITANCE_UNITS.resolve("microfarad").unwrap().name, "micro");
        assert_eq!(CAPACITANCE_UNITS.resolve("millifarad").unwrap().name, "milli");
        assert_eq!(CAPACITANCE_UNITS.resolve("farads").unwrap().name, "base");
    }

    #[test]
    fn test_equal_length_prefers_earlier_alias() {
        assert_eq!(RESISTANCE_UNITS.resolve("km").unwrap().name, "kilo");
        assert_eq!(RESISTANCE_UNITS.resolve("mk").unwrap().name, "milli");

        let found = KILOOHM.match_alias("km").unwrap();
        assert_eq!(found, AliasMatch { len: 1, position: 0 });
        assert_eq!(MILLIOHM.matched_alias_len("km"), Some(1));
    }

    #[test]
    fn test_lowercase_m_is_milli() {
        assert_eq!(RESISTANCE_UNITS.resolve("m").unwrap().name, "milli");
        // the table lowercases, so uppercase M alone is milli here too
        assert_eq!(RESISTANCE_UNITS.resolve("M").unwrap().name, "milli");
    }

    #[test]
    fn test_empty_alias_only_matches_empty_token() {
        assert_eq!(RESISTANCE_UNITS.resolve("").unwrap().name, "base");
        assert_eq!(RESISTANCE_UNITS.resolve("k").unwrap().name, "kilo");
        assert!(RESISTANCE_UNITS.resolve("xyz").is_none());
    }

    #[test]
    fn test_table_lookup_helpers() {
        assert_eq!(CAPACITANCE_UNITS.base().preferred_symbol, "F");
        assert_eq!(RESISTANCE_UNITS.base().preferred_symbol, "Ω");
        assert_eq!(RESISTANCE_UNITS.get("mega").unwrap().multiplier, 1e6);
        assert!(RESISTANCE_UNITS.get("giga").is_none());
    }

    #[test]
    fn test_aliases_are_lowercase() {
        for table in [&CAPACITANCE_UNITS, &RESISTANCE_UNITS] {
            for definition in table.definitions {
                for symbol in definition.symbols {
                    assert_eq!(*symbol, symbol.to_lowercase(), "{} in {}", symbol, table.quantity);
                }
            }
        }
    }
}
