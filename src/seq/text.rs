//! String-specific operations.
//!
//! Equality is exact byte-for-byte value equality; no Unicode normalisation
//! or case folding is performed.

use std::collections::HashSet;

use tracing::trace;

use crate::seq::types::StringSequence;

impl StringSequence {
    /// Index of the first element equal to `item`, or `None` if absent.
    pub fn index_of(&self, item: &str) -> Option<usize> {
        self.iter().position(|v| v == item)
    }

    /// Like [`contains`](crate::Sequence::contains) but takes a `&str`, so the
    /// caller does not need an owned `String` to look something up.
    pub fn contains_str(&self, item: &str) -> bool {
        self.index_of(item).is_some()
    }

    /// Removes duplicates in place, keeping the first occurrence of each value
    /// in its original position.
    pub fn unique(&mut self) {
        let before = self.len();
        let mut seen = HashSet::with_capacity(before);
        self.filter(|v| seen.insert(v.clone()));
        trace!(before, after = self.len(), "deduplicated");
    }

    /// Concatenates the elements with `separator` between consecutive ones.
    /// An empty sequence yields an empty string.
    pub fn join(&self, separator: &str) -> String {
        self.as_slice().join(separator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> StringSequence {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_unique_keeps_first_occurrence() {
        let mut seq = strings(&["a", "b", "a", "c"]);
        seq.unique();
        assert_eq!(seq, strings(&["a", "b", "c"]));

        let mut seq = strings(&["z", "y", "z", "z", "y", "x"]);
        seq.unique();
        assert_eq!(seq, strings(&["z", "y", "x"]));
    }

    #[test]
    fn test_index_of() {
        let seq = strings(&["a", "b", "a", "c"]);
        assert_eq!(seq.index_of("b"), Some(1));
        assert_eq!(seq.index_of("a"), Some(0));
        assert_eq!(seq.index_of("z"), None);
        assert!(seq.contains_str("c"));
        assert!(!seq.contains_str("C"));
    }

    #[test]
    fn test_join() {
        assert_eq!(strings(&["x", "y", "z"]).join("-"), "x-y-z");
        assert_eq!(strings(&["solo"]).join(", "), "solo");
        assert_eq!(StringSequence::new().join("-"), "");
    }

    #[test]
    fn test_map_in_place() {
        let mut seq = strings(&["go", "rust"]);
        seq.map(|s| s.to_uppercase());
        assert_eq!(seq, strings(&["GO", "RUST"]));
    }
}
