use std::fmt;

use log::{debug, trace};

use crate::constants::{DRAW_SIZE, MAX_PAIRS, POOL_SIZE, SMALLS};
use crate::draws::combinations::{binomial, combinations};
use crate::draws::errors::DrawError;
use crate::multiset::{MultisetError, NumberMultiset};

/// One concrete six-number selection: large numbers first, then the
/// doubled smalls, then the single smalls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draw {
    values: Vec<u64>,
    larges: usize,
    pairs: usize,
}

impl Draw {
    pub fn values(&self) -> &[u64] {
        &self.values
    }

    /// Count of large numbers, which is also the draw's bucket
    pub fn larges(&self) -> usize {
        self.larges
    }

    /// Count of small numbers that appear twice
    pub fn pairs(&self) -> usize {
        self.pairs
    }

    /// # Errors
    ///
    /// Returns an error if the draw's values do not form a valid multiset.
    pub fn multiset(&self) -> Result<NumberMultiset, MultisetError> {
        NumberMultiset::build(&self.values)
    }
}

impl fmt::Display for Draw {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self.values)
    }
}

/// Generates the draws of each bucket for one large-number pool.
///
/// The remaining `6 - L` slots are filled with small numbers where 0, 1 or 2
/// of them are doubled; each pair structure is generated on its own so no
/// draw is produced twice.
#[derive(Debug, Clone)]
pub struct DrawEnumerator {
    pool: [u64; POOL_SIZE],
}

impl DrawEnumerator {
    pub fn new(pool: [u64; POOL_SIZE]) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &[u64; POOL_SIZE] {
        &self.pool
    }

    /// Every draw holding exactly `larges` large numbers.
    ///
    /// # Errors
    ///
    /// Returns an error if `larges` exceeds the pool size.
    pub fn bucket(&self, larges: usize) -> Result<Vec<Draw>, DrawError> {
        check_larges(larges)?;

        let slots = DRAW_SIZE - larges;
        let mut draws = Vec::new();

        for large_set in combinations(&self.pool, larges) {
            for pairs in 0..=MAX_PAIRS.min(slots / 2) {
                for pair_values in combinations(&SMALLS, pairs) {
                    let singles_pool: Vec<u64> = SMALLS
                        .iter()
                        .copied()
                        .filter(|small| !pair_values.contains(small))
                        .collect();

                    for singles in combinations(&singles_pool, slots - 2 * pairs) {
                        let mut values = Vec::with_capacity(DRAW_SIZE);
                        values.extend_from_slice(&large_set);
                        for &pair in &pair_values {
                            values.extend([pair, pair]);
                        }
                        values.extend_from_slice(&singles);

                        trace!("Draw {:?}", values);
                        draws.push(Draw {
                            values,
                            larges,
                            pairs,
                        });
                    }
                }
            }
        }

        debug!("Generated {} draws with {} large numbers", draws.len(), larges);
        Ok(draws)
    }

    /// Closed-form size of [`DrawEnumerator::bucket`]:
    /// `C(4, L) * sum over p of C(10, p) * C(10 - p, 6 - L - 2p)`.
    ///
    /// # Errors
    ///
    /// Returns an error if `larges` exceeds the pool size.
    pub fn draws_in_bucket(larges: usize) -> Result<u64, DrawError> {
        check_larges(larges)?;

        let slots = (DRAW_SIZE - larges) as u64;
        let smalls = SMALLS.len() as u64;
        let per_large_set: u64 = (0..=(MAX_PAIRS as u64).min(slots / 2))
            .map(|pairs| binomial(smalls, pairs) * binomial(smalls - pairs, slots - 2 * pairs))
            .sum();

        Ok(binomial(POOL_SIZE as u64, larges as u64) * per_large_set)
    }
}

fn check_larges(larges: usize) -> Result<(), DrawError> {
    if larges > POOL_SIZE {
        return Err(DrawError::TooManyLarges {
            larges,
            max: POOL_SIZE,
        });
    }
    Ok(())
}
