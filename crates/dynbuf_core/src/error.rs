//! # Array Error Types
//!
//! All errors that can occur while operating on a [`DynamicArray`].
//!
//! Every variant maps to a stable numeric code (see [`ArrayError::code`]) so
//! callers that only speak integers can still tell failures apart.
//!
//! [`DynamicArray`]: crate::DynamicArray

use thiserror::Error;

/// Errors that can occur in the array.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArrayError {
    /// Read, write, insert or `pop_at` with an index outside the valid range.
    #[error("index out of range: index {index}, length {len}")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Array length at the time of the call.
        len: usize,
    },

    /// `pop` on a zero-length array.
    #[error("pop from empty array")]
    EmptyContainer,

    /// `remove` or `index_of` on a value that is not present.
    #[error("value not found: {value}")]
    ValueNotFound {
        /// The value that was searched for.
        value: i64,
    },

    /// Growth could not be satisfied (capacity overflow or allocator refusal).
    #[error("allocation failed: requested capacity {requested}")]
    AllocationFailed {
        /// The capacity, in elements, that could not be allocated.
        requested: usize,
    },

    /// Invalid configuration file or value.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ArrayError {
    /// Stable numeric code for this error.
    ///
    /// | Variant | Code |
    /// |---------|------|
    /// | `IndexOutOfRange` | -1 |
    /// | `EmptyContainer` | -2 |
    /// | `ValueNotFound` | -3 |
    /// | `AllocationFailed` | -5 |
    /// | `InvalidConfig` | -6 |
    #[must_use]
    pub const fn code(&self) -> i64 {
        match self {
            Self::IndexOutOfRange { .. } => -1,
            Self::EmptyContainer => -2,
            Self::ValueNotFound { .. } => -3,
            // -4 was "invalid pointer"; owned storage cannot produce it.
            Self::AllocationFailed { .. } => -5,
            Self::InvalidConfig(_) => -6,
        }
    }
}

/// Result type for array operations.
pub type ArrayResult<T> = Result<T, ArrayError>;
