//! vCard reading, record model, and canonical serialization.

pub mod error;
pub mod rfc;
