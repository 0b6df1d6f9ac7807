//! Concrete wrapper aliases.
//!
//! Both wrappers are instantiations of the generic [`Sequence`]; the aliases
//! exist so call sites can name the wrapper they mean.

use crate::seq::sequence::Sequence;

/// An ordered, growable sequence of integers.
///
/// Carries the statistics surface (`sum`, `average`, `min`, `max`, `std_dev`)
/// on top of the generic editing operations.
pub type IntSequence = Sequence<i64>;

/// An ordered, growable sequence of owned strings.
///
/// Carries `join`, `unique` and `index_of` on top of the generic editing
/// operations.
pub type StringSequence = Sequence<String>;
