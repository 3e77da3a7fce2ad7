//! Tests for vCard parse errors.

use std::io;

use super::error::{ParseError, ParseErrorKind, ReadError};

#[test]
fn display_includes_line_kind_and_message() {
    let err = ParseError::malformed(12, "missing ':' or ';' delimiter");
    assert_eq!(
        err.to_string(),
        "line 12: malformed property: missing ':' or ';' delimiter"
    );
}

#[test]
fn kind_display() {
    assert_eq!(ParseErrorKind::IncompleteProperty.to_string(), "incomplete property");
    assert_eq!(ParseErrorKind::IncompleteRecord.to_string(), "incomplete vCard");
    assert_eq!(ParseErrorKind::UnexpectedProperty.to_string(), "unexpected property");
    assert_eq!(ParseErrorKind::NestingTooDeep.to_string(), "nesting too deep");
    assert_eq!(ParseErrorKind::NoRecord.to_string(), "no vCard");
}

#[test]
fn constructors_set_kind() {
    assert_eq!(
        ParseError::incomplete_property(1, "x").kind,
        ParseErrorKind::IncompleteProperty
    );
    assert_eq!(
        ParseError::nesting_too_deep(3, 16).kind,
        ParseErrorKind::NestingTooDeep
    );

    let err = ParseError::unexpected(4, "BEGIN:VCARD", "FN:x");
    assert_eq!(err.kind, ParseErrorKind::UnexpectedProperty);
    assert_eq!(err.message, "expected BEGIN:VCARD, found FN:x");
}

#[test]
fn incomplete_record_names_opening_line() {
    let err = ParseError::incomplete_record(9, 2);
    assert_eq!(err.line, 9);
    assert!(err.message.contains("line 2"));
}

#[test]
fn read_error_is_transparent() {
    let parse_err = ParseError::malformed(5, "empty property name");
    let err = ReadError::from(parse_err.clone());

    assert_eq!(err.to_string(), parse_err.to_string());
    assert_eq!(err.kind(), Some(ParseErrorKind::MalformedProperty));
    assert_eq!(err.line(), Some(5));
}

#[test]
fn read_error_wraps_io() {
    let err = ReadError::from(io::Error::new(io::ErrorKind::UnexpectedEof, "truncated"));

    assert_eq!(err.to_string(), "truncated");
    assert_eq!(err.kind(), None);
    assert_eq!(err.line(), None);
}
