//! Exhaustive pairwise combination search over a draw

mod combiner;
mod errors;
mod operation;
mod solve;

pub use combiner::{Combiner, combine};
pub use errors::SolveError;
pub use operation::Operation;
pub use solve::{Solution, Step, solve};

#[cfg(test)]
mod tests;
