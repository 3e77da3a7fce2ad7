//! vCard implementation (vCard 2.1, RFC 2426, RFC 6350).
//!
//! This module provides types, streaming parsing, and serialization for
//! vCard contact records.
//!
//! ## Overview
//!
//! Records are read one logical property at a time. Each property keeps
//! its raw value; decoding quoted-printable or base64 payloads is left to a
//! [`TransferDecoder`] supplied by the caller.
//!
//! ## Usage
//!
//! ### Parsing
//!
//! ```rust
//! use vcfkit_rfc::rfc::vcard::parse;
//!
//! let input = "\
//! BEGIN:VCARD\r\n\
//! VERSION:3.0\r\n\
//! FN:John Doe\r\n\
//! TEL;TYPE=home:+1-555-0100\r\n\
//! END:VCARD\r\n";
//!
//! let cards = parse(input).unwrap();
//! assert_eq!(cards[0].formatted_name(), Some("John Doe"));
//! assert!(cards[0].first("tel").unwrap().has_type("home"));
//! ```
//!
//! ### Serializing
//!
//! ```rust
//! use vcfkit_rfc::rfc::vcard::{VCard, VCardProperty, serialize};
//!
//! let mut card = VCard::new();
//! card.add_property(VCardProperty::new("EMAIL", "jane@example.com"));
//! card.add_property(VCardProperty::new("FN", "Jane Doe"));
//!
//! let output = serialize(&[card]);
//! assert_eq!(output, "BEGIN:VCARD\nFN:Jane Doe\nEMAIL:jane@example.com\nEND:VCARD\n");
//! ```
//!
//! ## Round-Trip Fidelity
//!
//! Raw values are written back unchanged. Serialization uses a canonical
//! property order and sorted parameters, so equal records serialize equally.
//!
//! ## Submodules
//!
//! - [`core`] - Core types (`VCard`, `VCardProperty`, `LineSpan`, etc.)
//! - [`parse`] - Streaming reader and error types
//! - [`build`] - Serialization, escaping, and folding
//! - [`text`] - Component clean-up helpers

pub mod build;
pub mod core;
pub mod parse;
pub mod text;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use build::{escape, fold, serialize, serialize_single, write_vcard};
pub use core::{LineSpan, TransferDecoder, VCard, VCardParameters, VCardProperty, VCardVersion};
pub use parse::{
    ParseError, ParseErrorKind, ReadError, ReadResult, VCardReader, parse, parse_single,
    split_structured_value, unescape,
};
