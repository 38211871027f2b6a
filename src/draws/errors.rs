use thiserror::Error;

use crate::multiset::MultisetError;
use crate::stats::StatsError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DrawError {
    #[error("The large-number pool needs exactly {expected} numbers, got {count}")]
    PoolSize { count: usize, expected: usize },
    #[error("Large number {0} appears more than once in the pool")]
    DuplicateLarge(u64),
    #[error("Large number {value} is outside {min}..={max}")]
    LargeOutOfRange { value: u64, min: u64, max: u64 },
    #[error("A draw cannot hold {larges} large numbers (at most {max})")]
    TooManyLarges { larges: usize, max: usize },
    #[error("Invalid draw: {0}")]
    MultisetError(#[from] MultisetError),
    #[error("Aggregation error: {0}")]
    StatsError(#[from] StatsError),
}
