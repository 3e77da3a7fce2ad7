//! Logical property assembly.
//!
//! A property may span several physical lines. Which lines belong to it is
//! decided by one of three grammars, picked from the property's `ENCODING`
//! parameter:
//!
//! - quoted-printable: a trailing `=` is a soft break joining the next line,
//! - base64: an indented block, usually ended by a blank line,
//! - anything else: plain folding, where indented lines continue the value.

use std::io::BufRead;

use super::error::{ParseError, ReadResult};
use super::lexer::parse_content_line;
use super::line_source::{LineSource, is_continuation, strip_line_ending};
use crate::rfc::vcard::core::{LineSpan, VCardProperty, VCardVersion, params};

/// Continuation grammar of a property value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Continuation {
    QuotedPrintable,
    Base64,
    Folded,
}

impl Continuation {
    /// Selects the grammar from the property's declared encoding.
    #[must_use]
    pub fn for_property(prop: &VCardProperty) -> Self {
        match prop.encoding() {
            Some(params::QUOTED_PRINTABLE) => Self::QuotedPrintable,
            Some(params::BASE64) => Self::Base64,
            _ => Self::Folded,
        }
    }
}

/// Reads the next logical property.
///
/// Blank lines before the property are skipped. `version` selects the plain
/// folding rules and must be the revision currently in effect for the
/// enclosing vCard. Returns `None` at end of stream.
///
/// ## Errors
/// Returns a parse error if the first line cannot be tokenized or a
/// quoted-printable soft break has no following line, and passes through
/// I/O errors from the stream.
pub fn read_property<R: BufRead>(
    source: &mut LineSource<R>,
    version: &VCardVersion,
) -> ReadResult<Option<VCardProperty>> {
    let line = loop {
        let Some(raw) = source.next_line()? else {
            return Ok(None);
        };

        let content = strip_line_ending(&raw);
        if !content.is_empty() {
            break content.to_string();
        }
    };

    let start = source.line_number();
    let mut prop = parse_content_line(&line, start)?;
    let first_fragment = std::mem::take(&mut prop.value);
    let continuation = Continuation::for_property(&prop);

    prop.value = match continuation {
        Continuation::QuotedPrintable => read_quoted_printable(source, first_fragment)?,
        Continuation::Base64 => read_base64(source, &first_fragment)?,
        Continuation::Folded => read_folded(source, first_fragment, version)?,
    };
    prop.span = Some(LineSpan::new(start, source.line_number()));

    tracing::trace!(
        name = %prop.name,
        ?continuation,
        start,
        end = source.line_number(),
        "Read property"
    );

    Ok(Some(prop))
}

/// Joins quoted-printable soft line breaks.
///
/// The payload itself is left encoded.
fn read_quoted_printable<R: BufRead>(
    source: &mut LineSource<R>,
    first_fragment: String,
) -> ReadResult<String> {
    let mut value = String::new();
    let mut fragment = first_fragment;

    loop {
        let trimmed = fragment.trim_end();

        let Some(soft) = trimmed.strip_suffix('=') else {
            value.push_str(trimmed);
            return Ok(value);
        };
        value.push_str(soft);

        fragment = source.next_line()?.ok_or_else(|| {
            ParseError::incomplete_property(
                source.line_number(),
                "incomplete quoted-printable property value",
            )
        })?;
    }
}

/// What the line after a base64 fragment means for the block.
enum Base64Line {
    End,
    Terminator,
    Fragment(String),
}

/// Collects an indented base64 block.
///
/// The block ends at a blank or whitespace-only line, which is consumed, at
/// the next unindented line, which is left for the following property, or at
/// end of stream.
fn read_base64<R: BufRead>(
    source: &mut LineSource<R>,
    first_fragment: &str,
) -> ReadResult<String> {
    let mut value = first_fragment.trim().to_string();

    loop {
        let next = match source.peek_line()? {
            Some(line) => {
                let content = strip_line_ending(line);
                if content.trim().is_empty() {
                    Base64Line::Terminator
                } else if is_continuation(content) {
                    Base64Line::Fragment(content.trim().to_string())
                } else {
                    Base64Line::End
                }
            }
            None => Base64Line::End,
        };

        match next {
            Base64Line::End => return Ok(value),
            Base64Line::Terminator => {
                source.next_line()?;
                return Ok(value);
            }
            Base64Line::Fragment(fragment) => {
                source.next_line()?;
                value.push_str(&fragment);
            }
        }
    }
}

/// Unfolds indented continuation lines.
///
/// Legacy vCards fold at linear white space, so the leading white space of a
/// continuation collapses into one separating space. Later revisions drop
/// exactly one leading space or tab.
fn read_folded<R: BufRead>(
    source: &mut LineSource<R>,
    first_fragment: String,
    version: &VCardVersion,
) -> ReadResult<String> {
    let mut value = first_fragment;

    while source.peek_line()?.is_some_and(is_continuation) {
        let Some(line) = source.next_line()? else {
            break;
        };
        let content = strip_line_ending(&line);

        if version.is_legacy() {
            let rest = content.trim_start();
            if !rest.is_empty() {
                value.push(' ');
                value.push_str(rest);
            }
        } else {
            // The marker is a single ASCII space or tab.
            value.push_str(&content[1..]);
        }
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rfc::vcard::parse::ParseErrorKind;

    fn read_all(input: &str, version: &VCardVersion) -> ReadResult<Vec<VCardProperty>> {
        let mut source = LineSource::new(input.as_bytes());
        let mut props = Vec::new();
        while let Some(prop) = read_property(&mut source, version)? {
            props.push(prop);
        }
        Ok(props)
    }

    fn read_one(input: &str, version: &VCardVersion) -> VCardProperty {
        let mut source = LineSource::new(input.as_bytes());
        read_property(&mut source, version).unwrap().unwrap()
    }

    #[test]
    fn single_line_property() {
        let prop = read_one("FN:John Smith\r\n", &VCardVersion::V30);
        assert_eq!(prop.name, "fn");
        assert_eq!(prop.value, "John Smith");
        assert_eq!(prop.span, Some(LineSpan::new(1, 1)));
    }

    #[test]
    fn legacy_folding_collapses_leading_whitespace() {
        let prop = read_one("NOTE:long line\n continued text\n", &VCardVersion::V21);
        assert_eq!(prop.value, "long line continued text");
        assert_eq!(prop.span, Some(LineSpan::new(1, 2)));
    }

    #[test]
    fn legacy_folding_trims_whole_indent() {
        let prop = read_one("NOTE:a\n\t   b\n", &VCardVersion::V21);
        assert_eq!(prop.value, "a b");
    }

    #[test]
    fn later_revisions_strip_one_character() {
        let prop = read_one("NOTE:long line\n continued text\n", &VCardVersion::V30);
        assert_eq!(prop.value, "long linecontinued text");

        let prop = read_one("NOTE:abc\r\n  def\r\n\tghi\r\n", &VCardVersion::V40);
        assert_eq!(prop.value, "abc defghi");
    }

    #[test]
    fn folding_stops_at_unindented_line() {
        let props = read_all("NOTE:a\n b\nFN:x\n", &VCardVersion::V30).unwrap();
        assert_eq!(props.len(), 2);
        assert_eq!(props[0].value, "ab");
        assert_eq!(props[1].span, Some(LineSpan::new(3, 3)));
    }

    #[test]
    fn quoted_printable_soft_breaks_join() {
        let prop = read_one(
            "NOTE;ENCODING=QUOTED-PRINTABLE:line1=\nline2\n",
            &VCardVersion::V21,
        );
        assert_eq!(prop.value, "line1line2");
        assert_eq!(prop.span, Some(LineSpan::new(1, 2)));
    }

    #[test]
    fn quoted_printable_keeps_payload_encoded() {
        let prop = read_one(
            "NOTE;CHARSET=UTF-8;ENCODING=QUOTED-PRINTABLE:caf=C3=A9=  \r\n=0Aend \r\n",
            &VCardVersion::V21,
        );
        assert_eq!(prop.value, "caf=C3=A9=0Aend");
    }

    #[test]
    fn quoted_printable_continuation_is_not_treated_as_folding() {
        let props = read_all(
            "NOTE;ENCODING=QUOTED-PRINTABLE:a\n b\n",
            &VCardVersion::V21,
        );
        let err = props.unwrap_err();
        assert_eq!(err.kind(), Some(ParseErrorKind::MalformedProperty));
        assert_eq!(err.line(), Some(2));
    }

    #[test]
    fn quoted_printable_missing_continuation() {
        let mut source =
            LineSource::new("NOTE;ENCODING=QUOTED-PRINTABLE:abc=\n".as_bytes());
        let err = read_property(&mut source, &VCardVersion::V21).unwrap_err();
        assert_eq!(err.kind(), Some(ParseErrorKind::IncompleteProperty));
        assert_eq!(err.line(), Some(1));
    }

    #[test]
    fn base64_block_ends_at_blank_line() {
        let input = "PHOTO;ENCODING=BASE64;TYPE=JPEG:AAAA\n  BBBB\n\tCCCC\n\nFN:x\n";
        let props = read_all(input, &VCardVersion::V21).unwrap();

        assert_eq!(props[0].value, "AAAABBBBCCCC");
        assert_eq!(props[0].span, Some(LineSpan::new(1, 4)));
        assert_eq!(props[1].name, "fn");
    }

    #[test]
    fn base64_value_may_start_on_next_line() {
        let prop = read_one("PHOTO;ENCODING=BASE64:\n  AAAA\n  BBBB\n\n", &VCardVersion::V21);
        assert_eq!(prop.value, "AAAABBBB");
    }

    #[test]
    fn base64_block_may_end_at_end_of_stream() {
        let prop = read_one("KEY;ENCODING=BASE64:AAAA\n BBBB", &VCardVersion::V21);
        assert_eq!(prop.value, "AAAABBBB");
    }

    #[test]
    fn base64_block_ends_at_unindented_line() {
        let input = "PHOTO;ENCODING=BASE64:AAAA\n BBBB\nFN:x\n";
        let props = read_all(input, &VCardVersion::V21).unwrap();

        assert_eq!(props[0].value, "AAAABBBB");
        assert_eq!(props[0].span, Some(LineSpan::new(1, 2)));
        assert_eq!(props[1].span, Some(LineSpan::new(3, 3)));
    }

    #[test]
    fn blank_lines_before_property_are_skipped() {
        let prop = read_one("\r\n\n\nFN:x\n", &VCardVersion::V30);
        assert_eq!(prop.span, Some(LineSpan::new(4, 4)));
    }

    #[test]
    fn end_of_stream_yields_none() {
        let mut source = LineSource::new("\n\r\n".as_bytes());
        assert!(read_property(&mut source, &VCardVersion::V30).unwrap().is_none());
    }

    #[test]
    fn malformed_line_reports_its_number() {
        let err = read_all("FN:x\nFOO bar\n", &VCardVersion::V30).unwrap_err();
        assert_eq!(err.kind(), Some(ParseErrorKind::MalformedProperty));
        assert_eq!(err.line(), Some(2));
    }

    #[test]
    fn grammar_selection() {
        let qp = VCardProperty::new("note", "").with_param("encoding", "Quoted-Printable");
        let b64 = VCardProperty::new("photo", "").with_param("encoding", "BASE64");
        let b = VCardProperty::new("photo", "").with_param("encoding", "b");

        assert_eq!(Continuation::for_property(&qp), Continuation::QuotedPrintable);
        assert_eq!(Continuation::for_property(&b64), Continuation::Base64);
        assert_eq!(Continuation::for_property(&b), Continuation::Folded);
    }
}
