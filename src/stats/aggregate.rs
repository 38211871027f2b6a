use log::debug;

use crate::constants::POOL_SIZE;
use crate::stats::errors::StatsError;
use crate::stats::reachability::{CountingMode, ReachabilitySet};

/// One bucket per possible count of large numbers in a draw (0 through 4)
pub const BUCKET_COUNT: usize = POOL_SIZE + 1;

/// Running totals for the draws of one bucket
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BucketTotals {
    pub draws: u64,
    pub occurrences: u64,
    pub distinct: u64,
}

impl BucketTotals {
    pub fn solutions(&self, mode: CountingMode) -> u64 {
        match mode {
            CountingMode::Occurrences => self.occurrences,
            CountingMode::DistinctTargets => self.distinct,
        }
    }

    /// `100 * solutions / draws`, or zero for a bucket with no draws
    pub fn percentage(&self, mode: CountingMode) -> f64 {
        if self.draws == 0 {
            return 0.0;
        }
        100.0 * self.solutions(mode) as f64 / self.draws as f64
    }

    fn absorb(&mut self, other: &BucketTotals) {
        self.draws += other.draws;
        self.occurrences += other.occurrences;
        self.distinct += other.distinct;
    }
}

/// Totals across a whole sweep, partitioned by large-number count
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregateCounters {
    buckets: [BucketTotals; BUCKET_COUNT],
}

impl AggregateCounters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one finished draw's recorder to the bucket for `larges`.
    ///
    /// # Errors
    ///
    /// Returns an error if `larges` has no bucket.
    pub fn fold(&mut self, larges: usize, recorder: &ReachabilitySet) -> Result<(), StatsError> {
        let bucket = self
            .buckets
            .get_mut(larges)
            .ok_or(StatsError::UnknownBucket {
                larges,
                max: BUCKET_COUNT - 1,
            })?;
        bucket.draws += 1;
        bucket.occurrences += recorder.snapshot();
        bucket.distinct += recorder.distinct();
        Ok(())
    }

    pub fn bucket(&self, larges: usize) -> Option<&BucketTotals> {
        self.buckets.get(larges)
    }

    pub fn buckets(&self) -> impl Iterator<Item = (usize, &BucketTotals)> {
        self.buckets.iter().enumerate()
    }

    pub fn total(&self) -> BucketTotals {
        let mut total = BucketTotals::default();
        for bucket in &self.buckets {
            total.absorb(bucket);
        }
        debug!(
            "Aggregated {} draws, {} occurrences, {} distinct targets",
            total.draws, total.occurrences, total.distinct
        );
        total
    }
}
