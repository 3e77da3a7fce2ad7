//! vCard parsing.
//!
//! Reads vCard 2.1, 3.0 and 4.0 records from any buffered stream.
//!
//! ## Usage
//!
//! ```rust
//! use vcfkit_rfc::rfc::vcard::parse;
//!
//! let input = "\
//! BEGIN:VCARD\r\n\
//! VERSION:2.1\r\n\
//! FN:John Doe\r\n\
//! NOTE;ENCODING=QUOTED-PRINTABLE:first=\r\n\
//! second\r\n\
//! END:VCARD\r\n";
//!
//! let cards = parse::parse(input).unwrap();
//! assert_eq!(cards[0].formatted_name(), Some("John Doe"));
//! assert_eq!(cards[0].first_value("note"), Some("firstsecond"));
//! ```
//!
//! ## Features
//!
//! - Streams records one at a time through [`VCardReader`]
//! - Quoted-printable soft breaks and base64 blocks
//! - Version-dependent line unfolding
//! - Skips legacy nested `AGENT` records
//! - Line spans on every property and record

mod error;
mod lexer;
mod line_source;
mod reader;
mod unfold;
mod values;

#[cfg(test)]
mod error_tests;

pub use error::{ParseError, ParseErrorKind, ParseResult, ReadError, ReadResult};
pub use lexer::parse_content_line;
pub use line_source::LineSource;
pub use reader::{ReaderOptions, VCardReader, parse, parse_single};
pub use unfold::{Continuation, read_property};
pub use values::{split_structured_value, unescape};
