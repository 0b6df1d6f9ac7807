//! # seqwrap - Sequence Wrappers
//!
//! Convenience wrappers around an ordered, indexable, growable sequence:
//! one over integers with aggregate statistics, one over strings with join,
//! de-duplication and lookup helpers. Both are the same generic [`Sequence`]
//! container; the element-specific operations are only available on the
//! matching instantiation.
//!
//! ## Features
//!
//! - **Bounds-checked editing**: `get`, `update`, `remove` and `insert` return
//!   [`SeqError::IndexOutOfRange`] instead of panicking, and never partially mutate
//! - **In-place and copy-returning pairs**: `sort_ascending`/`sorted_ascending`,
//!   `filter`/`filtered`, `map`/`mapped`
//! - **Total aggregates**: `sum`, `average` and `std_dev` define 0 for an empty
//!   sequence; only `min`/`max` can fail
//! - **Optional sharing**: [`SharedSequence`] guards one instance behind a lock
//!
//! ## Example
//!
//! ```rust
//! use seqwrap::{IntSequence, StringSequence};
//!
//! let mut numbers = IntSequence::from(vec![3, 1, 2]);
//! numbers.sort_ascending();
//! assert_eq!(numbers.as_slice(), &[1, 2, 3]);
//! assert_eq!(numbers.sum(), 6);
//!
//! let mut words: StringSequence = ["a", "b", "a"].iter().map(|s| s.to_string()).collect();
//! words.unique();
//! assert_eq!(words.join("-"), "a-b");
//! ```

pub mod seq;

// Re-export the main public API from the sequence module
pub use seq::{IntSequence, PRINT_LABEL, SeqError, Sequence, SharedSequence, StringSequence};
