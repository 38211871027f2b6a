use log::{debug, info};

use crate::draws::config::SweepConfig;
use crate::draws::enumerator::DrawEnumerator;
use crate::draws::errors::DrawError;
use crate::search::Combiner;
use crate::stats::{AggregateCounters, BUCKET_COUNT, ReachabilitySet};

/// Reported after each finished bucket of a sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BucketProgress {
    pub larges: usize,
    pub completed: usize,
    pub total: usize,
}

impl BucketProgress {
    pub fn percent(&self) -> usize {
        self.completed * 100 / self.total
    }
}

/// Scores every draw of one large-number pool, bucket by bucket
pub struct Sweep {
    config: SweepConfig,
    enumerator: DrawEnumerator,
}

impl Sweep {
    /// # Errors
    ///
    /// Returns an error if the configured pool is invalid.
    pub fn new(config: SweepConfig) -> Result<Self, DrawError> {
        config.validate()?;
        let enumerator = DrawEnumerator::new(config.larges);
        Ok(Self { config, enumerator })
    }

    pub fn config(&self) -> &SweepConfig {
        &self.config
    }

    /// # Errors
    ///
    /// Returns an error if a generated draw cannot be searched or aggregated.
    pub fn run(&self) -> Result<AggregateCounters, DrawError> {
        self.run_with_progress(|_| {})
    }

    /// Sweep buckets 0 through 4, calling `on_bucket` after each one.
    ///
    /// # Errors
    ///
    /// Returns an error if a generated draw cannot be searched or aggregated.
    pub fn run_with_progress<F>(&self, mut on_bucket: F) -> Result<AggregateCounters, DrawError>
    where
        F: FnMut(BucketProgress),
    {
        info!("Sweeping all draws for large pool {:?}", self.config.larges);

        let mut counters = AggregateCounters::new();
        let mut recorder = ReachabilitySet::new();

        for larges in 0..BUCKET_COUNT {
            self.run_bucket(larges, &mut recorder, &mut counters)?;
            on_bucket(BucketProgress {
                larges,
                completed: larges + 1,
                total: BUCKET_COUNT,
            });
        }

        Ok(counters)
    }

    /// Search every draw with `larges` large numbers, folding each one into
    /// `counters`. `recorder` is reset before each draw.
    ///
    /// # Errors
    ///
    /// Returns an error if `larges` has no bucket or a draw is invalid.
    pub fn run_bucket(
        &self,
        larges: usize,
        recorder: &mut ReachabilitySet,
        counters: &mut AggregateCounters,
    ) -> Result<(), DrawError> {
        let draws = self.enumerator.bucket(larges)?;
        info!("Searching {} draws with {} large numbers", draws.len(), larges);

        let mut combiner = Combiner::new();
        for draw in &draws {
            let multiset = draw.multiset()?;
            recorder.reset();
            combiner.combine(&multiset, recorder);
            counters.fold(larges, recorder)?;
            debug!(
                "Draw {} ({} pairs): {} occurrences, {} distinct targets",
                draw,
                draw.pairs(),
                recorder.snapshot(),
                recorder.distinct()
            );
        }

        info!(
            "Bucket {} done: {} nodes, {} evaluations",
            larges,
            combiner.nodes(),
            combiner.evaluations()
        );
        Ok(())
    }
}
