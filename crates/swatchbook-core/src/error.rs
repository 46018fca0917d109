//! Error types for swatchbook

use thiserror::Error;

use crate::aco::AcoError;
use crate::gimp::GimpError;

/// Result type for swatchbook operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in swatchbook operations
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Failed to decode an Adobe Color palette
    #[error("ACO decode error: {0}")]
    Aco(#[from] AcoError),

    /// Failed to parse a GIMP palette
    #[error("GIMP palette error: {0}")]
    Gimp(#[from] GimpError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// The underlying ACO format error, if this is one
    pub fn as_aco(&self) -> Option<&AcoError> {
        match self {
            Error::Aco(e) => Some(e),
            _ => None,
        }
    }
}
