//! Error types shared by the workspace's indexed structures.

use thiserror::Error;

/// Error variants for indexed-structure operations.
///
/// Every variant is detected at the API boundary before any mutation, so a
/// rejected call leaves the structure unchanged.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// An index outside the structure's valid domain.
    #[error("index {index} out of range for length {len}")]
    OutOfRange {
        /// The offending index.
        index: usize,
        /// The structure's element count.
        len: usize,
    },

    /// A range operation where the lower bound exceeds the upper bound.
    #[error("invalid range: start {start} > end {end}")]
    InvalidRange {
        /// Lower bound of the rejected range.
        start: usize,
        /// Upper bound of the rejected range.
        end: usize,
    },

    /// The supplied operation lacks an algebraic capability the call needs.
    #[error("unsupported operation: {0}")]
    Unsupported(&'static str),
}

/// A specialized Result type for indexed-structure operations.
pub type Result<T> = std::result::Result<T, Error>;
