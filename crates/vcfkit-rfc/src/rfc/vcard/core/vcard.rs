//! vCard record type.

use indexmap::IndexMap;

use super::property::{VCardProperty, names};
use super::span::LineSpan;
use super::version::VCardVersion;

/// A complete vCard.
///
/// Properties are grouped by name. Names keep the order in which they were
/// first added, and properties sharing a name keep their insertion order.
/// The bracketing `BEGIN`/`END` properties are not stored.
#[derive(Debug, Clone, Default)]
pub struct VCard {
    properties: IndexMap<String, Vec<VCardProperty>>,
    /// Input lines from the opening to the closing bracket.
    pub span: Option<LineSpan>,
}

impl VCard {
    /// Creates an empty vCard.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a property after any others with the same name.
    pub fn add_property(&mut self, prop: VCardProperty) {
        self.properties
            .entry(prop.name.clone())
            .or_default()
            .push(prop);
    }

    /// Removes every property with the given name.
    pub fn remove_property(&mut self, name: &str) -> Option<Vec<VCardProperty>> {
        self.properties.shift_remove(&name.to_lowercase())
    }

    /// Returns all properties with the given name, in insertion order.
    #[must_use]
    pub fn get(&self, name: &str) -> &[VCardProperty] {
        self.properties
            .get(&name.to_lowercase())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Returns mutable access to the properties with the given name.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut [VCardProperty]> {
        self.properties
            .get_mut(&name.to_lowercase())
            .map(Vec::as_mut_slice)
    }

    /// Returns the first property with the given name.
    #[must_use]
    pub fn first(&self, name: &str) -> Option<&VCardProperty> {
        self.get(name).first()
    }

    /// Returns the raw value of the first property with the given name.
    #[must_use]
    pub fn first_value(&self, name: &str) -> Option<&str> {
        self.first(name).map(|p| p.value.as_str())
    }

    /// Returns whether any property has the given name.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        !self.get(name).is_empty()
    }

    /// Iterates over property names in first-seen order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(String::as_str)
    }

    /// Iterates over `(name, properties)` groups in first-seen order.
    pub fn groups(&self) -> impl Iterator<Item = (&str, &[VCardProperty])> {
        self.properties
            .iter()
            .map(|(name, props)| (name.as_str(), props.as_slice()))
    }

    /// Iterates over every property, grouped by name.
    pub fn iter(&self) -> impl Iterator<Item = &VCardProperty> {
        self.properties.values().flatten()
    }

    /// Total number of properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.values().map(Vec::len).sum()
    }

    /// Returns whether the vCard has no properties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.values().all(Vec::is_empty)
    }

    /// Returns the declared version, if any.
    #[must_use]
    pub fn version(&self) -> Option<VCardVersion> {
        self.first_value(names::VERSION).map(VCardVersion::parse)
    }

    /// Returns the formatted name (FN property).
    #[must_use]
    pub fn formatted_name(&self) -> Option<&str> {
        self.first_value(names::FN)
    }
}

/// Equality compares per-name property lists and ignores the line span.
impl PartialEq for VCard {
    fn eq(&self, other: &Self) -> bool {
        self.properties == other.properties
    }
}

impl Eq for VCard {}

impl<'a> IntoIterator for &'a VCard {
    type Item = &'a VCardProperty;
    type IntoIter = std::iter::Flatten<indexmap::map::Values<'a, String, Vec<VCardProperty>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.properties.values().flatten()
    }
}
