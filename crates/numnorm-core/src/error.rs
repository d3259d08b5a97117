//! Error types for numnorm
//!
//! Normalization itself never fails: an unrecognized number is `None`, not
//! an error. Errors only describe caller misuse and the I/O done by the
//! surrounding tooling.

use thiserror::Error;

/// numnorm error types
#[derive(Debug, Error)]
pub enum Error {
    /// Value has no meaningful string form (null, bool, array, object)
    #[error("Invalid input: expected a string or number, found {found}")]
    InvalidInput { found: String },

    /// Reading input for batch normalization failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Report could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for numnorm operations
pub type Result<T> = std::result::Result<T, Error>;
