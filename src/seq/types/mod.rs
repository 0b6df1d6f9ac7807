//! Type definitions for the sequence wrappers.
//!
//! This module contains the error type returned by index-based and aggregate
//! operations, and the aliases naming the two concrete wrappers.

pub mod aliases;
pub mod error;

pub use aliases::{IntSequence, StringSequence};
pub use error::SeqError;
