//! Concurrent editing through a shared handle.
//!
//! Several threads append to one sequence through [`SharedSequence`], then a
//! single compound edit runs under one write lock.
//!
//! Run with: cargo run --example shared_editing

use seqwrap::{IntSequence, SharedSequence};
use std::thread;
use std::time::Instant;

fn main() {
    println!("=== Shared Sequence Example ===\n");

    let num_threads = 4;
    let operations_per_thread = 250;
    let shared = SharedSequence::from(IntSequence::new());

    println!(
        "Starting {} threads, each adding {} values",
        num_threads, operations_per_thread
    );

    let start_time = Instant::now();
    let handles: Vec<_> = (0..num_threads)
        .map(|thread_id| {
            let shared = shared.clone();
            thread::spawn(move || {
                for i in 0..operations_per_thread {
                    shared.write().add(thread_id * operations_per_thread + i);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("writer thread panicked");
    }

    println!("All writers finished in {:?}", start_time.elapsed());
    println!("  length: {}", shared.len());
    println!("  sum:    {}", shared.with(|seq| seq.sum()));

    // Check-then-edit under a single lock
    let trimmed = shared.with_mut(|seq| {
        let before = seq.len();
        seq.filter(|v| v % 100 == 0);
        seq.sort_descending();
        before - seq.len()
    });
    println!("\nRemoved {} values not divisible by 100", trimmed);

    let snapshot = shared.snapshot();
    snapshot.print();
    println!("  max: {:?}", snapshot.max());

    println!("\n=== Example Complete ===");
}
