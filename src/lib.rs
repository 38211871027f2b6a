//! Countdown - reachability statistics for the numbers round
//!
//! For every admissible six-number draw (a pool of four large numbers plus
//! small numbers 1-10, each small at most twice) this library finds which
//! targets in 100..=999 can be produced by repeatedly combining two numbers
//! with `+`, `-`, `*` and `/`, where every intermediate result must be a
//! positive integer, and aggregates the results by how many large numbers
//! each draw uses.

pub mod constants;
pub mod draws;
pub mod multiset;
pub mod report;
pub mod search;
pub mod stats;

// Re-export the main public API
pub use draws::{Draw, DrawEnumerator, DrawError, Sweep, SweepConfig};
pub use multiset::{MultisetError, NumberMultiset};
pub use search::{Combiner, Operation, Solution, SolveError, combine, solve};
pub use stats::{AggregateCounters, CountingMode, ReachabilitySet};

/// Search a single draw and return everything it reaches.
///
/// This is a convenience function that builds the multiset, runs a fresh
/// [`Combiner`] over it and hands back the filled recorder.
///
/// # Arguments
///
/// * `values` - One to six positive numbers, in any order
///
/// # Errors
///
/// This function will return an error if `values` is empty, holds more than
/// six numbers, or contains a zero.
///
/// # Examples
///
/// ```
/// use countdown::reachable_targets;
///
/// let reached = reachable_targets(&[100, 4]).unwrap();
/// assert!(reached.is_reached(400));
/// assert!(!reached.is_reached(25));
/// ```
pub fn reachable_targets(values: &[u64]) -> Result<ReachabilitySet, MultisetError> {
    let multiset = NumberMultiset::build(values)?;
    let mut recorder = ReachabilitySet::new();
    combine(&multiset, &mut recorder);
    Ok(recorder)
}
