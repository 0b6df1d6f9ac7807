//! Statistics over integer sequences.
//!
//! These operations exist only on [`IntSequence`]. All of them except
//! [`min`](IntSequence::min) and [`max`](IntSequence::max) are total and define
//! an explicit result for the empty sequence.

use tracing::debug;

use crate::seq::types::{IntSequence, SeqError};

impl IntSequence {
    /// Arithmetic sum of all elements; 0 for an empty sequence.
    ///
    /// Overflow wraps around instead of panicking, so the operation stays total.
    pub fn sum(&self) -> i64 {
        self.iter().fold(0i64, |acc, v| acc.wrapping_add(*v))
    }

    /// Mean of all elements; 0.0 for an empty sequence.
    pub fn average(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        self.wide_sum() as f64 / self.len() as f64
    }

    /// Sum in a 128-bit accumulator; unlike [`sum`](Self::sum) it cannot wrap.
    fn wide_sum(&self) -> i128 {
        self.iter().map(|v| *v as i128).sum()
    }

    /// Largest element.
    ///
    /// # Returns
    ///
    /// * `Ok(i64)` - The maximum value
    /// * `Err(SeqError::EmptySequence)` - If the sequence has no elements
    pub fn max(&self) -> Result<i64, SeqError> {
        self.iter().copied().max().ok_or_else(|| {
            debug!("max requested on empty sequence");
            SeqError::EmptySequence
        })
    }

    /// Smallest element, or [`SeqError::EmptySequence`].
    pub fn min(&self) -> Result<i64, SeqError> {
        self.iter().copied().min().ok_or_else(|| {
            debug!("min requested on empty sequence");
            SeqError::EmptySequence
        })
    }

    /// Population standard deviation (divides by N, not N - 1); 0.0 for an
    /// empty sequence.
    pub fn std_dev(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        let mean = self.average();
        let variance = self
            .iter()
            .map(|v| {
                let diff = *v as f64 - mean;
                diff * diff
            })
            .sum::<f64>()
            / self.len() as f64;
        variance.sqrt()
    }
}
