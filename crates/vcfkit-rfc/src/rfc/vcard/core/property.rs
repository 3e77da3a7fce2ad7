//! vCard property types.

use indexmap::{IndexMap, IndexSet};

use super::decode::{DEFAULT_CHARSET, DEFAULT_ENCODING, TransferDecoder};
use super::span::LineSpan;

/// Parameters of a property: lowercase name to an ordered set of lowercase
/// values.
pub type VCardParameters = IndexMap<String, IndexSet<String>>;

/// A vCard property.
///
/// The value is kept raw: escapes and transfer encodings are left in place so
/// a record can be written back unchanged.
#[derive(Debug, Clone)]
pub struct VCardProperty {
    /// Property name (normalized to lowercase, group prefix removed).
    pub name: String,
    /// Parameters in order of first appearance.
    pub params: VCardParameters,
    /// Raw value after continuation lines have been joined.
    pub value: String,
    /// Input lines this property was read from.
    pub span: Option<LineSpan>,
}

impl VCardProperty {
    /// Creates a property without parameters.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into().to_lowercase(),
            params: VCardParameters::new(),
            value: value.into(),
            span: None,
        }
    }

    /// Adds a parameter and returns the property.
    #[must_use]
    pub fn with_param(mut self, name: &str, value: &str) -> Self {
        self.add_param(name, value);
        self
    }

    /// Adds a parameter value.
    ///
    /// Name and value are lowercased. Values already present for the name
    /// are ignored, so repeating a parameter accumulates a set.
    pub fn add_param(&mut self, name: &str, value: &str) {
        self.params
            .entry(name.to_lowercase())
            .or_default()
            .insert(value.to_lowercase());
    }

    /// Removes a parameter with all of its values.
    pub fn remove_param(&mut self, name: &str) -> Option<IndexSet<String>> {
        self.params.shift_remove(&name.to_lowercase())
    }

    /// Returns the values of a parameter.
    #[must_use]
    pub fn get_param(&self, name: &str) -> Option<&IndexSet<String>> {
        self.params.get(&name.to_lowercase())
    }

    /// Returns the first value of a parameter.
    #[must_use]
    pub fn get_param_value(&self, name: &str) -> Option<&str> {
        self.get_param(name)?.first().map(String::as_str)
    }

    /// Returns whether the parameter has the specified value (case-insensitive).
    #[must_use]
    pub fn has_param_value(&self, name: &str, value: &str) -> bool {
        self.get_param(name)
            .is_some_and(|values| values.contains(&value.to_lowercase()))
    }

    /// Returns whether this property has the specified TYPE value.
    #[must_use]
    pub fn has_type(&self, type_value: &str) -> bool {
        self.has_param_value(params::TYPE, type_value)
    }

    /// Returns the declared transfer encoding, if any.
    #[must_use]
    pub fn encoding(&self) -> Option<&str> {
        self.get_param_value(params::ENCODING)
    }

    /// Returns the declared charset, if any.
    #[must_use]
    pub fn charset(&self) -> Option<&str> {
        self.get_param_value(params::CHARSET)
    }

    /// Decodes the raw value with the declared encoding and charset.
    ///
    /// Missing declarations fall back to `8bit` and `utf-8`.
    ///
    /// ## Errors
    /// Returns the decoder's error if the payload cannot be decoded.
    pub fn decode_with<D: TransferDecoder>(&self, decoder: &D) -> Result<String, D::Error> {
        decoder.decode(
            &self.value,
            self.encoding().unwrap_or(DEFAULT_ENCODING),
            self.charset().unwrap_or(DEFAULT_CHARSET),
        )
    }
}

/// Equality ignores the line span; parameters compare as sets.
impl PartialEq for VCardProperty {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.params == other.params && self.value == other.value
    }
}

impl Eq for VCardProperty {}

/// Common property names as constants.
pub mod names {
    // Brackets
    pub const BEGIN: &str = "begin";
    pub const END: &str = "end";
    pub const VERSION: &str = "version";

    // Identification
    pub const FN: &str = "fn";
    pub const N: &str = "n";
    pub const SORT_STRING: &str = "sort-string";
    pub const NICKNAME: &str = "nickname";
    pub const BDAY: &str = "bday";
    pub const PHOTO: &str = "photo";

    // Delivery addressing
    pub const ADR: &str = "adr";
    pub const LABEL: &str = "label";

    // Communications
    pub const TEL: &str = "tel";
    pub const EMAIL: &str = "email";
    pub const MAILER: &str = "mailer";

    // Geographical
    pub const TZ: &str = "tz";
    pub const GEO: &str = "geo";

    // Organizational
    pub const TITLE: &str = "title";
    pub const ROLE: &str = "role";
    pub const LOGO: &str = "logo";
    pub const AGENT: &str = "agent";
    pub const ORG: &str = "org";

    // Explanatory
    pub const CATEGORIES: &str = "categories";
    pub const NOTE: &str = "note";
    pub const PRODID: &str = "prodid";
    pub const REV: &str = "rev";
    pub const SOUND: &str = "sound";
    pub const UID: &str = "uid";
    pub const URL: &str = "url";

    // Security
    pub const CLASS: &str = "class";
    pub const KEY: &str = "key";
}

/// Parameter names and values the reader interprets.
pub mod params {
    pub const TYPE: &str = "type";
    pub const ENCODING: &str = "encoding";
    pub const CHARSET: &str = "charset";

    pub const QUOTED_PRINTABLE: &str = "quoted-printable";
    pub const BASE64: &str = "base64";
}
