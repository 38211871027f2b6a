use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatsError {
    #[error("No bucket for draws with {larges} large numbers (expected 0..={max})")]
    UnknownBucket { larges: usize, max: usize },
}
