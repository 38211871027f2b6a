use std::collections::HashSet;

use log::debug;

use crate::constants::{DEFAULT_LARGES, LARGE_MAX, LARGE_MIN, POOL_SIZE};
use crate::draws::errors::DrawError;
use crate::stats::CountingMode;

/// Configuration for a full sweep over every draw
#[derive(Debug, Clone, PartialEq)]
pub struct SweepConfig {
    pub larges: [u64; POOL_SIZE],
    pub counting: CountingMode,
}

impl SweepConfig {
    /// Build a configuration from a user-supplied large-number pool.
    ///
    /// # Errors
    ///
    /// Returns an error unless `larges` holds four distinct numbers in `11..=100`.
    pub fn with_larges(larges: &[u64], counting: CountingMode) -> Result<Self, DrawError> {
        let pool: [u64; POOL_SIZE] = larges.try_into().map_err(|_| DrawError::PoolSize {
            count: larges.len(),
            expected: POOL_SIZE,
        })?;

        let config = Self {
            larges: pool,
            counting,
        };
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns an error if a large number is out of range or repeated.
    pub fn validate(&self) -> Result<(), DrawError> {
        debug!("Validating large-number pool {:?}", self.larges);

        let mut seen = HashSet::with_capacity(POOL_SIZE);
        for &value in &self.larges {
            if !(LARGE_MIN..=LARGE_MAX).contains(&value) {
                return Err(DrawError::LargeOutOfRange {
                    value,
                    min: LARGE_MIN,
                    max: LARGE_MAX,
                });
            }
            if !seen.insert(value) {
                return Err(DrawError::DuplicateLarge(value));
            }
        }
        Ok(())
    }
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            larges: DEFAULT_LARGES,
            counting: CountingMode::default(),
        }
    }
}
