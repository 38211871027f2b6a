use thiserror::Error;

/// Errors raised when building a multiset from raw values
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MultisetError {
    #[error("A draw needs at least one number")]
    Empty,
    #[error("A draw holds at most {max} numbers, got {count}")]
    TooManyValues { count: usize, max: usize },
    #[error("Draw numbers must be positive, got {0}")]
    NonPositiveValue(u64),
}
