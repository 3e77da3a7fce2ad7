//! vCard parse error types.

use std::fmt;

use thiserror::Error;

/// Result type for line-level parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Result type for operations that read from a stream.
pub type ReadResult<T> = Result<T, ReadError>;

/// An error that occurred during vCard parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The kind of error.
    pub kind: ParseErrorKind,
    /// Line number where the error occurred (1-based).
    pub line: usize,
    /// Additional context or message.
    pub message: String,
}

impl ParseError {
    /// Creates a new parse error.
    #[must_use]
    pub fn new(kind: ParseErrorKind, line: usize, message: impl Into<String>) -> Self {
        Self {
            kind,
            line,
            message: message.into(),
        }
    }

    /// Creates a malformed property error.
    #[must_use]
    pub fn malformed(line: usize, message: impl Into<String>) -> Self {
        Self::new(ParseErrorKind::MalformedProperty, line, message)
    }

    /// Creates an incomplete property error.
    #[must_use]
    pub fn incomplete_property(line: usize, message: impl Into<String>) -> Self {
        Self::new(ParseErrorKind::IncompleteProperty, line, message)
    }

    /// Creates an incomplete record error for a record opened at `opened_at`.
    #[must_use]
    pub fn incomplete_record(line: usize, opened_at: usize) -> Self {
        Self::new(
            ParseErrorKind::IncompleteRecord,
            line,
            format!("vCard opened at line {opened_at} not closed with END:VCARD"),
        )
    }

    /// Creates an unexpected property error.
    #[must_use]
    pub fn unexpected(line: usize, expected: &str, found: &str) -> Self {
        Self::new(
            ParseErrorKind::UnexpectedProperty,
            line,
            format!("expected {expected}, found {found}"),
        )
    }

    /// Creates a nesting depth error.
    #[must_use]
    pub fn nesting_too_deep(line: usize, limit: usize) -> Self {
        Self::new(
            ParseErrorKind::NestingTooDeep,
            line,
            format!("nested AGENT vCards deeper than {limit} levels"),
        )
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}: {}", self.line, self.kind, self.message)
    }
}

impl std::error::Error for ParseError {}

/// The kind of parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A line could not be split into name, parameters, and value.
    MalformedProperty,
    /// A quoted-printable soft break is missing its continuation line.
    IncompleteProperty,
    /// The input ended inside a vCard.
    IncompleteRecord,
    /// A vCard did not start with `BEGIN:VCARD`.
    UnexpectedProperty,
    /// Nested `AGENT` vCards exceeded the configured depth.
    NestingTooDeep,
    /// No vCard was found where one was required.
    NoRecord,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedProperty => write!(f, "malformed property"),
            Self::IncompleteProperty => write!(f, "incomplete property"),
            Self::IncompleteRecord => write!(f, "incomplete vCard"),
            Self::UnexpectedProperty => write!(f, "unexpected property"),
            Self::NestingTooDeep => write!(f, "nesting too deep"),
            Self::NoRecord => write!(f, "no vCard"),
        }
    }
}

/// An error raised while reading vCards from a stream.
///
/// I/O failures of the underlying stream are passed through untouched.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ReadError {
    /// Returns the parse error kind, or `None` for I/O failures.
    #[must_use]
    pub fn kind(&self) -> Option<ParseErrorKind> {
        match self {
            Self::Parse(err) => Some(err.kind),
            Self::Io(_) => None,
        }
    }

    /// Returns the offending line for parse errors.
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Parse(err) => Some(err.line),
            Self::Io(_) => None,
        }
    }
}
