//! Unit kinds: the two directories a unit can be scaffolded into

use std::fmt;
use std::str::FromStr;

/// Category of unit being scaffolded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitKind {
    Modules,
    Components,
}

impl UnitKind {
    pub const ALL: [UnitKind; 2] = [UnitKind::Modules, UnitKind::Components];

    /// Directory name under `src/`
    pub fn dir_name(&self) -> &'static str {
        match self {
            UnitKind::Modules => "modules",
            UnitKind::Components => "components",
        }
    }

    /// Singular label used in prompts and messages
    pub fn singular(&self) -> &'static str {
        match self {
            UnitKind::Modules => "module",
            UnitKind::Components => "component",
        }
    }
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dir_name())
    }
}

impl FromStr for UnitKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "module" | "modules" => Ok(UnitKind::Modules),
            "component" | "components" => Ok(UnitKind::Components),
            other => Err(format!("Unknown kind: {}", other)),
        }
    }
}
