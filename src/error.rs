//! Centralized error type for the strobe umbrella crate.
//!
//! Wraps all subsystem errors so `?` propagates naturally across crate boundaries.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] strobe_core::Error),

    #[cfg(feature = "sampler")]
    #[error("Sampler: {0}")]
    Sampler(#[from] strobe_sampler::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
