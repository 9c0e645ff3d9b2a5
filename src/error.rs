//! Error types for buffer operations.

use thiserror::Error;

/// Error type for cursor buffer operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// A typed read or raw write referenced bytes beyond the current
    /// storage bounds. The cursor is left where it was before the call.
    #[error("out of range: {requested} bytes at offset {offset}, {available} available")]
    OutOfRange {
        /// Cursor position the operation started from.
        offset: usize,
        /// Number of bytes the operation needed.
        requested: usize,
        /// Number of bytes remaining in storage at that position.
        available: usize,
    },

    /// A 64-bit write was given a value outside the target 64-bit range.
    #[error("value {value} is not representable in the target 64-bit range")]
    IntConversion {
        /// Display form of the rejected value.
        value: String,
    },
}

/// Result type alias for cursor buffer operations.
pub type Result<T> = std::result::Result<T, Error>;
