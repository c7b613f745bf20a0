//! Common types for schemes

use std::fmt;

/// Type of versioning scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemeKind {
    /// Two-part compatibility.release versions (1.2, 1.2.0)
    Monotonic,
    /// Any number of dotted non-negative integers (1.2.3.4)
    Dotted,
    /// Perl dotted-decimal versions (v1.2.3, 1.002003)
    Perl,
}

impl SchemeKind {
    /// All scheme kinds, in registry order
    pub const ALL: [SchemeKind; 3] = [SchemeKind::Monotonic, SchemeKind::Dotted, SchemeKind::Perl];

    /// Returns the string representation of the scheme kind
    pub fn as_str(&self) -> &'static str {
        match self {
            SchemeKind::Monotonic => "monotonic",
            SchemeKind::Dotted => "dotted",
            SchemeKind::Perl => "perl",
        }
    }
}

impl fmt::Display for SchemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SchemeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "monotonic" => Ok(SchemeKind::Monotonic),
            "dotted" => Ok(SchemeKind::Dotted),
            "perl" => Ok(SchemeKind::Perl),
            _ => Err(format!(
                "unknown scheme '{}' (expected one of: monotonic, dotted, perl)",
                s
            )),
        }
    }
}
