//! Error types for the core parameter model.

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Breakpoint `x` values must be strictly ascending.
    #[error("breakpoint at index {index} is earlier than its predecessor")]
    UnsortedBreakpoints { index: usize },

    /// Two breakpoints share the same `x`.
    #[error("duplicate breakpoint time at index {index}")]
    DuplicateBreakpoint { index: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
