//! Physical line ranges attached to parsed entities.

use std::fmt;

/// A 1-based, inclusive range of physical input lines.
///
/// Used for diagnostics only; it never takes part in property or record
/// equality and is never serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineSpan {
    /// First physical line (inclusive).
    pub start: usize,
    /// Last physical line (inclusive).
    pub end: usize,
}

impl LineSpan {
    /// Creates a span from its first and last line.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Creates a span covering a single line.
    #[must_use]
    pub const fn line(line: usize) -> Self {
        Self {
            start: line,
            end: line,
        }
    }

    /// Extends this span to include another one.
    #[must_use]
    pub fn extend(&self, other: Self) -> Self {
        Self {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

impl fmt::Display for LineSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.start, self.end)
    }
}
