//! Core sequence implementation.
//!
//! This module contains the generic [`Sequence`] struct and the editing and
//! query operations shared by every element type. Element-specific
//! capabilities live in [`numeric`](crate::seq::numeric) and
//! [`text`](crate::seq::text).

use std::fmt;
use std::io::{self, Write};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::seq::types::SeqError;

/// Label written in front of the contents by [`Sequence::print`].
pub const PRINT_LABEL: &str = "Slice contents:";

/// An ordered, 0-indexed, growable sequence that exclusively owns its elements.
///
/// The wrapped `Vec` is the only state. Index-based operations validate their
/// index before touching it, so a failed call never leaves a partial mutation
/// behind.
///
/// # Design
///
/// - Mutating operations (`sort_*`, `filter`, `map`) take `&mut self` and return nothing
/// - Copy-returning operations (`sorted_*`, `filtered`, `mapped`) take `&self` and
///   return a new `Sequence`, leaving the original untouched
/// - Serialized transparently as the underlying list
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sequence<T> {
    items: Vec<T>,
}

impl<T> Sequence<T> {
    /// Creates an empty sequence.
    pub fn new() -> Self {
        Sequence { items: Vec::new() }
    }

    /// Creates an empty sequence with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Sequence {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Number of elements currently held.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Consumes the sequence and returns the underlying `Vec`.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Builds the error for a rejected index and logs the rejection.
    fn out_of_range(&self, op: &'static str, index: usize) -> SeqError {
        debug!(op, index, len = self.items.len(), "rejected out-of-range index");
        SeqError::IndexOutOfRange {
            index,
            len: self.items.len(),
        }
    }

    /// Appends an element to the end of the sequence. Always succeeds.
    pub fn add(&mut self, item: T) {
        self.items.push(item);
        trace!(len = self.items.len(), "added element");
    }

    /// Removes the element at `index`, shifting later elements left.
    ///
    /// # Arguments
    ///
    /// * `index` - Position to remove, must be in `[0, len)`
    ///
    /// # Returns
    ///
    /// * `Ok(T)` - The removed element
    /// * `Err(SeqError::IndexOutOfRange)` - If `index >= len`; the sequence is unchanged
    pub fn remove(&mut self, index: usize) -> Result<T, SeqError> {
        if index >= self.items.len() {
            return Err(self.out_of_range("remove", index));
        }
        let removed = self.items.remove(index);
        trace!(index, len = self.items.len(), "removed element");
        Ok(removed)
    }

    /// Replaces the element at `index` with `item`. Length is unchanged.
    ///
    /// # Returns
    ///
    /// * `Ok(T)` - The element that was replaced
    /// * `Err(SeqError::IndexOutOfRange)` - If `index >= len`
    pub fn update(&mut self, index: usize, item: T) -> Result<T, SeqError> {
        if index >= self.items.len() {
            return Err(self.out_of_range("update", index));
        }
        trace!(index, "updated element");
        Ok(std::mem::replace(&mut self.items[index], item))
    }

    /// Returns a reference to the element at `index`.
    pub fn get(&self, index: usize) -> Result<&T, SeqError> {
        self.items
            .get(index)
            .ok_or_else(|| self.out_of_range("get", index))
    }

    /// Inserts `item` at `index`, shifting the element at `index` and everything
    /// after it one position right.
    ///
    /// `index == len` is accepted and appends.
    ///
    /// # Arguments
    ///
    /// * `index` - Position the new element will occupy, must be in `[0, len]`
    /// * `item` - The element to insert
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the element was inserted
    /// * `Err(SeqError::IndexOutOfRange)` - If `index > len`; the sequence is unchanged
    pub fn insert(&mut self, index: usize, item: T) -> Result<(), SeqError> {
        if index > self.items.len() {
            return Err(self.out_of_range("insert", index));
        }
        self.items.insert(index, item);
        trace!(index, len = self.items.len(), "inserted element");
        Ok(())
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.items.clear();
        trace!("cleared sequence");
    }

    /// Reverses the element order in place.
    pub fn reverse(&mut self) {
        self.items.reverse();
    }

    /// Keeps only the elements for which `predicate` returns true.
    /// Relative order of the kept elements is preserved.
    pub fn filter<P>(&mut self, mut predicate: P)
    where
        P: FnMut(&T) -> bool,
    {
        let before = self.items.len();
        self.items.retain(|item| predicate(item));
        trace!(before, after = self.items.len(), "filtered in place");
    }

    /// Replaces every element with `transform(element)`.
    pub fn map<F>(&mut self, mut transform: F)
    where
        F: FnMut(&T) -> T,
    {
        for item in &mut self.items {
            *item = transform(item);
        }
    }

    /// Returns a new sequence holding `transform` applied to every element.
    ///
    /// The result always has the same length as `self`. For integer sequences
    /// this is the element-wise transform that older call sites knew as
    /// "Filtered".
    pub fn mapped<U, F>(&self, transform: F) -> Sequence<U>
    where
        F: FnMut(&T) -> U,
    {
        Sequence {
            items: self.items.iter().map(transform).collect(),
        }
    }

    /// Returns the first element satisfying `predicate`, or `None`.
    pub fn find<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.items.iter().find(|item| predicate(item))
    }

    /// True iff every element satisfies `predicate`. Vacuously true when empty.
    pub fn all<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.items.iter().all(predicate)
    }

    /// True iff at least one element satisfies `predicate`.
    pub fn any<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.items.iter().any(predicate)
    }

    /// True iff no element satisfies `predicate`. Vacuously true when empty.
    pub fn none<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        !self.any(predicate)
    }
}

impl<T: PartialEq> Sequence<T> {
    /// True iff any element equals `item`.
    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }
}

impl<T: Clone> Sequence<T> {
    /// Returns a new sequence with only the elements satisfying `predicate`.
    ///
    /// Unlike [`mapped`](Self::mapped), the result may be shorter than `self`.
    pub fn filtered<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        Sequence {
            items: self
                .items
                .iter()
                .filter(|item| predicate(item))
                .cloned()
                .collect(),
        }
    }
}

impl<T: Ord> Sequence<T> {
    /// Sorts in ascending order. The sort is stable.
    pub fn sort_ascending(&mut self) {
        self.items.sort();
    }

    /// Sorts in descending order. The sort is stable.
    pub fn sort_descending(&mut self) {
        self.items.sort_by(|a, b| b.cmp(a));
    }
}

impl<T: Ord + Clone> Sequence<T> {
    /// Returns an ascending copy; `self` is unaffected.
    pub fn sorted_ascending(&self) -> Self {
        let mut sorted = self.clone();
        sorted.sort_ascending();
        sorted
    }

    /// Returns a descending copy; `self` is unaffected.
    pub fn sorted_descending(&self) -> Self {
        let mut sorted = self.clone();
        sorted.sort_descending();
        sorted
    }
}

impl<T: fmt::Display> Sequence<T> {
    /// Writes the labelled contents to standard output, e.g.
    /// `Slice contents: [1 2 3]`.
    ///
    /// This is a display side effect only; use [`write_to`](Self::write_to)
    /// or the [`Display`](fmt::Display) impl to capture the same rendering.
    pub fn print(&self) {
        if let Err(e) = self.write_to(&mut io::stdout().lock()) {
            warn!("failed to print sequence: {}", e);
        }
    }

    /// Writes the labelled line that [`print`](Self::print) emits to `out`.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{PRINT_LABEL} {self}")
    }
}

/// Renders as `[a b c]`: brackets around space-separated elements.
impl<T: fmt::Display> fmt::Display for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "]")
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Sequence::new()
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(items: Vec<T>) -> Self {
        Sequence { items }
    }
}

impl<T> From<Sequence<T>> for Vec<T> {
    fn from(seq: Sequence<T>) -> Self {
        seq.items
    }
}

impl<T> AsRef<[T]> for Sequence<T> {
    fn as_ref(&self) -> &[T] {
        &self.items
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Sequence {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Sequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
