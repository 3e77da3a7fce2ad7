//! vCard revision tags.

use std::convert::Infallible;
use std::fmt;

/// vCard version.
///
/// The version selects the plain folding grammar used while reading: the
/// legacy 2.1 revision unfolds at linear white space, later revisions strip
/// exactly one continuation character.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum VCardVersion {
    /// vCard 2.1 (legacy, the reader's fallback).
    #[default]
    V21,
    /// vCard 3.0 (RFC 2426).
    V30,
    /// vCard 4.0 (RFC 6350).
    V40,
    /// Any other version tag, kept verbatim.
    Other(String),
}

impl VCardVersion {
    /// Parses a `VERSION` property value.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "2.1" => Self::V21,
            "3.0" => Self::V30,
            "4.0" => Self::V40,
            other => Self::Other(other.to_string()),
        }
    }

    /// Returns the version string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::V21 => "2.1",
            Self::V30 => "3.0",
            Self::V40 => "4.0",
            Self::Other(s) => s,
        }
    }

    /// Returns whether this is the legacy revision with its own folding rules.
    #[must_use]
    pub const fn is_legacy(&self) -> bool {
        matches!(self, Self::V21)
    }
}

impl core::str::FromStr for VCardVersion {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for VCardVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
