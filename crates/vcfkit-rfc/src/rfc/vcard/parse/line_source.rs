//! Physical line reader with one line of lookahead.

use std::io::{self, BufRead};

/// Reads physical lines from a buffered stream.
///
/// Lines are returned with their terminator. At most one line is held back
/// by [`LineSource::peek_line`]; the consumed-line counter only advances in
/// [`LineSource::next_line`].
#[derive(Debug)]
pub struct LineSource<R> {
    reader: R,
    line_number: usize,
    peeked: Option<Option<String>>,
}

impl<R: BufRead> LineSource<R> {
    /// Wraps a buffered reader.
    #[must_use]
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_number: 0,
            peeked: None,
        }
    }

    /// Consumes the next physical line, or returns `None` at end of stream.
    ///
    /// ## Errors
    /// Returns the stream's I/O error, including invalid UTF-8.
    pub fn next_line(&mut self) -> io::Result<Option<String>> {
        let line = match self.peeked.take() {
            Some(line) => line,
            None => self.read_physical()?,
        };

        if line.is_some() {
            self.line_number += 1;
        }

        Ok(line)
    }

    /// Returns the next physical line without consuming it.
    ///
    /// ## Errors
    /// Returns the stream's I/O error, including invalid UTF-8.
    pub fn peek_line(&mut self) -> io::Result<Option<&str>> {
        if self.peeked.is_none() {
            self.peeked = Some(self.read_physical()?);
        }

        Ok(self.peeked.as_ref().and_then(|line| line.as_deref()))
    }

    /// Number of physical lines consumed so far.
    #[must_use]
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Returns the wrapped reader, dropping any peeked line.
    #[must_use]
    pub fn into_inner(self) -> R {
        self.reader
    }

    fn read_physical(&mut self) -> io::Result<Option<String>> {
        let mut buf = String::new();
        let read = self.reader.read_line(&mut buf)?;

        Ok((read > 0).then_some(buf))
    }
}

/// Strips every trailing CR and LF.
pub(crate) fn strip_line_ending(line: &str) -> &str {
    line.trim_end_matches(['\r', '\n'])
}

/// Returns whether a physical line continues the previous one.
pub(crate) fn is_continuation(line: &str) -> bool {
    line.starts_with([' ', '\t'])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_line_keeps_terminator_and_counts() {
        let mut source = LineSource::new("A:1\r\nB:2\n".as_bytes());

        assert_eq!(source.next_line().unwrap().as_deref(), Some("A:1\r\n"));
        assert_eq!(source.line_number(), 1);
        assert_eq!(source.next_line().unwrap().as_deref(), Some("B:2\n"));
        assert_eq!(source.line_number(), 2);
        assert_eq!(source.next_line().unwrap(), None);
        assert_eq!(source.line_number(), 2);
    }

    #[test]
    fn peek_does_not_consume() {
        let mut source = LineSource::new("A:1\nB:2\n".as_bytes());

        assert_eq!(source.peek_line().unwrap(), Some("A:1\n"));
        assert_eq!(source.peek_line().unwrap(), Some("A:1\n"));
        assert_eq!(source.line_number(), 0);

        assert_eq!(source.next_line().unwrap().as_deref(), Some("A:1\n"));
        assert_eq!(source.line_number(), 1);
        assert_eq!(source.peek_line().unwrap(), Some("B:2\n"));
    }

    #[test]
    fn peek_at_end_of_stream() {
        let mut source = LineSource::new("A:1".as_bytes());

        assert_eq!(source.next_line().unwrap().as_deref(), Some("A:1"));
        assert_eq!(source.peek_line().unwrap(), None);
        assert_eq!(source.next_line().unwrap(), None);
        assert_eq!(source.line_number(), 1);
    }

    #[test]
    fn empty_line_is_distinct_from_end_of_stream() {
        let mut source = LineSource::new("\n".as_bytes());

        assert_eq!(source.next_line().unwrap().as_deref(), Some("\n"));
        assert_eq!(source.next_line().unwrap(), None);
    }

    #[test]
    fn invalid_utf8_is_an_io_error() {
        let bytes: &[u8] = &[b'F', b'N', b':', 0xff, b'\n'];
        let mut source = LineSource::new(bytes);

        let err = source.next_line().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn strip_line_ending_handles_crlf() {
        assert_eq!(strip_line_ending("abc\r\n"), "abc");
        assert_eq!(strip_line_ending("abc\n"), "abc");
        assert_eq!(strip_line_ending("abc \r\n"), "abc ");
        assert_eq!(strip_line_ending("\r\n"), "");
    }

    #[test]
    fn continuation_markers() {
        assert!(is_continuation(" x"));
        assert!(is_continuation("\tx"));
        assert!(!is_continuation("x"));
        assert!(!is_continuation(""));
    }
}
