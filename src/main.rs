//! Demo binary for the sequence wrappers.
//!
//! Walks through the integer and string wrappers, logging each step. Log
//! verbosity is controlled through `RUST_LOG` (default `info`); set
//! `RUST_LOG=seqwrap=trace` to see every mutation.

use std::error::Error;

use seqwrap::{IntSequence, SharedSequence, StringSequence};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Starting sequence wrapper demo...");

    let mut numbers = IntSequence::from(vec![2, 4, 4, 4, 5, 5, 7, 9]);
    numbers.print();
    info!(
        sum = numbers.sum(),
        average = numbers.average(),
        std_dev = numbers.std_dev(),
        min = numbers.min()?,
        max = numbers.max()?,
        "integer statistics"
    );

    numbers.insert(0, 10)?;
    numbers.sort_descending();
    numbers.print();

    let squares = numbers.mapped(|v| v * v);
    info!("squares: {}", squares);

    if let Err(e) = numbers.remove(numbers.len() + 1) {
        warn!("expected failure: {}", e);
    }

    let mut words: StringSequence = ["pear", "apple", "pear", "fig"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    words.unique();
    words.sort_ascending();
    words.print();
    info!(
        joined = %words.join(", "),
        apple = ?words.index_of("apple"),
        short = words.filtered(|w| w.len() <= 4).len(),
        "string helpers"
    );

    let shared = SharedSequence::from(words);
    shared.with_mut(|seq| seq.map(|w| w.to_uppercase()));
    let snapshot = serde_json::to_string(&shared.snapshot())?;
    info!("shared snapshot: {}", snapshot);

    Ok(())
}
