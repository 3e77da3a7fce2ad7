//! Core vCard types.

mod decode;
mod property;
mod span;
mod vcard;
mod version;

pub use decode::{DEFAULT_CHARSET, DEFAULT_ENCODING, TransferDecoder};
pub use property::{VCardParameters, VCardProperty, names, params};
pub use span::LineSpan;
pub use vcard::VCard;
pub use version::VCardVersion;
