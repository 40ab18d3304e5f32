//! Error types.

use thiserror::Error;

/// Error type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The host cancelled the preprocessing job.
    #[error("preprocessing aborted by host")]
    Aborted,

    /// Sample data failed validation.
    #[error("bad sample data: {0}")]
    BadSampleData(String),
}

/// Result type.
pub type Result<T> = std::result::Result<T, Error>;
