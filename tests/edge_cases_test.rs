//! Edge case integration tests for the sequence wrappers.
//!
//! These tests cover empty sequences, rejected indices, and values that could
//! be mistaken for sentinels.

use seqwrap::{IntSequence, PRINT_LABEL, SeqError, StringSequence};

#[test]
fn test_empty_int_sequence_aggregates() {
    let seq = IntSequence::new();
    assert_eq!(seq.sum(), 0);
    assert_eq!(seq.average(), 0.0);
    assert_eq!(seq.std_dev(), 0.0);
    assert_eq!(seq.max(), Err(SeqError::EmptySequence));
    assert_eq!(seq.min(), Err(SeqError::EmptySequence));
    assert!(!seq.contains(&0));
    assert_eq!(seq.find(|_| true), None);
}

#[test]
fn test_empty_string_sequence_totals() {
    let seq = StringSequence::new();
    assert_eq!(seq.join("-"), "");
    assert_eq!(seq.index_of(""), None);
    assert!(seq.all(|_| false));
    assert!(seq.none(|_| true));
    assert!(!seq.any(|_| true));
    assert!(seq.filtered(|_| true).is_empty());
    assert!(seq.mapped(|s| s.len()).is_empty());

    let mut seq = seq;
    seq.unique();
    assert!(seq.is_empty());
}

#[test]
fn test_rejected_indices_leave_sequence_unchanged() {
    let mut seq = IntSequence::from(vec![1, 2, 3]);
    let len = seq.len();

    let err = seq.remove(len + 1).unwrap_err();
    assert_eq!(err, SeqError::IndexOutOfRange { index: 4, len: 3 });
    assert_eq!(err.to_string(), "index out of range: 4");

    assert_eq!(
        seq.insert(len + 1, 9),
        Err(SeqError::IndexOutOfRange { index: 4, len: 3 })
    );
    assert!(seq.remove(len).is_err());
    assert!(seq.update(len, 0).is_err());
    assert!(seq.get(len).is_err());
    assert!(seq.get(usize::MAX).is_err());

    assert_eq!(seq.as_slice(), &[1, 2, 3]);
}

#[test]
fn test_index_operations_on_empty_sequence() {
    let mut seq = StringSequence::new();
    assert!(seq.get(0).is_err());
    assert!(seq.remove(0).is_err());
    assert!(seq.update(0, "x".to_string()).is_err());

    // Index zero equals the length, so this appends
    seq.insert(0, "first".to_string()).unwrap();
    assert_eq!(seq.len(), 1);
}

#[test]
fn test_minus_one_is_ordinary_data() {
    let seq = IntSequence::from(vec![-1, -1]);
    assert_eq!(seq.find(|v| *v == -1), Some(&-1));
    assert_eq!(seq.max(), Ok(-1));
    assert_eq!(seq.average(), -1.0);
}

#[test]
fn test_single_element_statistics() {
    let seq = IntSequence::from(vec![42]);
    assert_eq!(seq.min(), Ok(42));
    assert_eq!(seq.max(), Ok(42));
    assert_eq!(seq.std_dev(), 0.0);
    assert_eq!(seq.average(), 42.0);
}

#[test]
fn test_unique_is_case_sensitive() {
    let mut seq: StringSequence = ["Go", "go", "GO", "go"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    seq.unique();
    assert_eq!(seq.join(","), "Go,go,GO");
}

#[test]
fn test_join_with_empty_elements() {
    let seq: StringSequence = ["", "a", ""].iter().map(|s| s.to_string()).collect();
    assert_eq!(seq.join("|"), "|a|");
    assert_eq!(seq.index_of(""), Some(0));
}

#[test]
fn test_clear_then_reuse() {
    let mut seq = IntSequence::from(vec![9, 8, 7]);
    seq.clear();
    assert_eq!(seq.len(), 0);
    assert_eq!(seq.max(), Err(SeqError::EmptySequence));

    seq.add(1);
    assert_eq!(seq.as_slice(), &[1]);
}

#[test]
fn test_large_sequence_operations() {
    let large_size = 10_000i64;
    let mut seq: IntSequence = (0..large_size).collect();
    assert_eq!(seq.len(), large_size as usize);
    assert_eq!(seq.sum(), large_size * (large_size - 1) / 2);

    seq.sort_descending();
    assert_eq!(seq.get(0), Ok(&(large_size - 1)));

    seq.filter(|v| v % 2 == 0);
    assert_eq!(seq.len(), (large_size / 2) as usize);
    assert!(seq.all(|v| v % 2 == 0));
}

#[test]
fn test_print_rendering() {
    assert_eq!(PRINT_LABEL, "Slice contents:");

    let seq = IntSequence::from(vec![1, 2, 3]);
    let mut out = Vec::new();
    seq.write_to(&mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "Slice contents: [1 2 3]\n");

    let words: StringSequence = ["x", "y"].iter().map(|s| s.to_string()).collect();
    let mut out = Vec::new();
    words.write_to(&mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "Slice contents: [x y]\n");

    seq.print();
}
