//! Simple standalone example of the sequence wrappers.
//!
//! Demonstrates the editing surface, the statistics on integer sequences,
//! and the string helpers.
//!
//! Run with: cargo run --example simple

use seqwrap::{IntSequence, SeqError, StringSequence};

fn main() -> Result<(), SeqError> {
    println!("=== Simple Sequence Example ===\n");

    let mut scores = IntSequence::from(vec![72, 88, 95, 61]);
    scores.print();

    println!("\nA late score arrives and a typo is corrected:");
    scores.add(79);
    scores.update(3, 67)?;
    scores.print();

    println!("\n--- Statistics ---");
    println!("  sum:     {}", scores.sum());
    println!("  average: {:.2}", scores.average());
    println!("  min/max: {}/{}", scores.min()?, scores.max()?);
    println!("  std dev: {:.3}", scores.std_dev());

    println!("\n--- Sorted copies leave the original alone ---");
    println!("  ascending:  {}", scores.sorted_ascending());
    println!("  descending: {}", scores.sorted_descending());
    println!("  original:   {}", scores);

    let curved = scores.mapped(|s| (s + 5).min(100));
    println!("  curved:     {}", curved);

    match scores.find(|s| *s > 90) {
        Some(top) => println!("  first above 90: {}", top),
        None => println!("  nobody above 90"),
    }

    if let Err(e) = scores.insert(scores.len() + 1, 0) {
        println!("  rejected insert: {}", e);
    }

    println!("\n=== Strings ===");
    let mut tags: StringSequence = ["rust", "go", "rust", "zig", "go"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    tags.print();

    tags.unique();
    println!("  unique:      {}", tags);
    println!("  joined:      {}", tags.join(" | "));
    println!("  index of go: {:?}", tags.index_of("go"));
    println!("  short tags:  {}", tags.filtered(|t| t.len() <= 2));

    tags.map(|t| t.to_uppercase());
    println!("  upper:       {}", tags);
    println!(
        "  all ascii: {}, any empty: {}",
        tags.all(|t| t.is_ascii()),
        tags.any(|t| t.is_empty())
    );

    println!("\n=== Example Complete ===");
    Ok(())
}
