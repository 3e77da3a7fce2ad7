//! Transfer decoding seam.
//!
//! The reader only assembles continuation lines; turning a quoted-printable
//! or base64 payload into text is left to an implementation of
//! [`TransferDecoder`] supplied by the caller.

/// Decodes a raw property value according to its declared transfer encoding
/// and charset.
pub trait TransferDecoder {
    /// Error returned when the payload cannot be decoded.
    type Error: std::error::Error;

    /// Decodes `raw`, which was declared with `encoding` and `charset`
    /// (both lowercase).
    ///
    /// ## Errors
    /// Returns an error if the payload is invalid for the encoding or the
    /// decoded bytes are invalid for the charset.
    fn decode(&self, raw: &str, encoding: &str, charset: &str) -> Result<String, Self::Error>;
}

/// Encoding assumed when a property declares none.
pub const DEFAULT_ENCODING: &str = "8bit";

/// Charset assumed when a property declares none.
pub const DEFAULT_CHARSET: &str = "utf-8";
