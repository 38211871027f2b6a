use thiserror::Error;

use crate::multiset::MultisetError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolveError {
    #[error("Invalid draw: {0}")]
    MultisetError(#[from] MultisetError),
    #[error("Target must lie in {min}..={max}, got {target}")]
    TargetOutOfRange { target: u64, min: u64, max: u64 },
}
