use thiserror::Error;

use crate::rfc::vcard::parse::ReadError;

/// RFC parsing and configuration errors
#[derive(Error, Debug)]
pub enum RfcError {
    #[error(transparent)]
    ReadError(#[from] ReadError),

    #[error(transparent)]
    CoreError(#[from] vcfkit_core::error::CoreError),
}

pub type RfcResult<T> = std::result::Result<T, RfcError>;
