//! Error type for sequence operations.
//!
//! Only two conditions can fail: an index outside the accepted range of an
//! index-based operation, and an extremum requested from an empty sequence.
//! Every other operation is total.

use thiserror::Error;

/// Errors returned by [`Sequence`](crate::Sequence) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SeqError {
    /// The index is outside `[0, len)` for get/update/remove, or outside
    /// `[0, len]` for insert.
    #[error("index out of range: {index}")]
    IndexOutOfRange {
        /// The rejected index
        index: usize,
        /// Length of the sequence when the index was rejected
        len: usize,
    },

    /// `min` or `max` was called on a sequence with no elements.
    #[error("sequence is empty")]
    EmptySequence,
}

impl SeqError {
    /// Returns the rejected index, if this is an index error.
    pub fn index(&self) -> Option<usize> {
        match self {
            SeqError::IndexOutOfRange { index, .. } => Some(*index),
            SeqError::EmptySequence => None,
        }
    }
}
