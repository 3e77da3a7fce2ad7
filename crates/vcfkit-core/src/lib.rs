//! Shared ambient layer for the vcfkit crates: configuration, errors, and
//! format constants.

pub mod config;
pub mod constants;
pub mod error;
