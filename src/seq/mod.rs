//! Sequence wrapper module.
//!
//! This module contains the generic [`Sequence`] container, the
//! integer-only statistics and string-only helpers layered on it, the
//! optional lock-guarded handle, and their supporting types.

pub mod numeric;
pub mod sequence;
pub mod shared;
pub mod text;
pub mod types;

// Re-export the main public API
pub use sequence::{PRINT_LABEL, Sequence};
pub use shared::SharedSequence;
pub use types::{IntSequence, SeqError, StringSequence};
