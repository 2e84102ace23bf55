//! Named switch pole/throw configurations

use serde::Serialize;

/// Named pole/throw configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SwitchPattern {
    pub name: &'static str,
    pub poles: u32,
    pub throws: u32,
}

pub static SWITCH_PATTERNS: &[SwitchPattern] = &[
    SwitchPattern {
        name: "spst",
        poles: 1,
        throws: 1,
    },
    SwitchPattern {
        name: "spdt",
        poles: 1,
        throws: 2,
    },
    SwitchPattern {
        name: "dpst",
        poles: 2,
        throws: 1,
    },
    SwitchPattern {
        name: "dpdt",
        poles: 2,
        throws: 2,
    },
    SwitchPattern {
        name: "3pdt",
        poles: 3,
        throws: 2,
    },
    SwitchPattern {
        name: "4pdt",
        poles: 4,
        throws: 2,
    },
];

/// Look up a named configuration. Exact match after lowercasing and
/// dropping whitespace; no partial matches.
pub fn resolve_switch_pattern(name: &str) -> Option<&'static SwitchPattern> {
    let name: String = name
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect();
    SWITCH_PATTERNS.iter().find(|p| p.name == name)
}

/// All named configurations in table order
pub fn switch_patterns() -> &'static [SwitchPattern] {
    SWITCH_PATTERNS
}
