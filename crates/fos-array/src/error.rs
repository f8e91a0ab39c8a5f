//! Array Errors
//!
//! Failures of the strict-access primitives. Absence of a match in a
//! search is reported as `None`, not as an error.

/// Array operation error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArrayError {
    /// Index at or past the current length
    #[error("Index {index} out of bounds for array of length {len}")]
    Index { index: usize, len: usize },

    /// Start/length pair exceeding the array bounds
    #[error("Range {start}..{start}+{len} out of bounds for array of length {size}")]
    Range { start: usize, len: usize, size: usize },

    /// Operation needs at least one element
    #[error("Array is empty")]
    Empty,
}

/// Result alias for array operations
pub type Result<T> = std::result::Result<T, ArrayError>;

impl ArrayError {
    pub(crate) fn index(index: usize, len: usize) -> Self {
        ArrayError::Index { index, len }
    }

    pub(crate) fn range(start: usize, len: usize, size: usize) -> Self {
        ArrayError::Range { start, len, size }
    }
}
