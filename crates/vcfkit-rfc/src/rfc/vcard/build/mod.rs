//! vCard serialization.
//!
//! This module provides serializers for vCard content:
//! - Escape: text value escaping
//! - Fold: value folding into continuation lines
//! - Serializer: record serialization with canonical ordering

mod escape;
mod fold;
mod serializer;

pub use escape::escape;
pub use fold::{FoldOptions, fold, fold_with};
pub use serializer::{
    property_priority, serialize, serialize_single, write_all, write_vcard,
};
