use log::trace;

use crate::constants::{TARGET_COUNT, TARGET_MIN, is_target};

/// How a draw's recorded reaches are turned into a "solutions" figure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CountingMode {
    /// Every successful (pair, operator) hit on a target counts once
    #[default]
    Occurrences,
    /// Each reached target counts once per draw
    DistinctTargets,
}

/// Targets reached while searching a single draw.
///
/// Reached flags and the occurrence counter are kept apart: `mark` bumps the
/// counter on every call, even for a target that is already flagged.
#[derive(Debug, Clone)]
pub struct ReachabilitySet {
    reached: [bool; TARGET_COUNT],
    occurrences: u64,
}

impl ReachabilitySet {
    pub fn new() -> Self {
        Self {
            reached: [false; TARGET_COUNT],
            occurrences: 0,
        }
    }

    pub fn reset(&mut self) {
        self.reached.fill(false);
        self.occurrences = 0;
    }

    /// Record one reach of `target`. Returns false, leaving the set
    /// untouched, when `target` lies outside `100..=999`.
    pub fn mark(&mut self, target: u64) -> bool {
        if !is_target(target) {
            return false;
        }
        match self.reached.get_mut(slot(target)) {
            Some(flag) => {
                *flag = true;
                self.occurrences += 1;
                trace!("Marked target {} ({} occurrences)", target, self.occurrences);
                true
            }
            None => false,
        }
    }

    /// Occurrence counter for the current draw
    pub fn snapshot(&self) -> u64 {
        self.occurrences
    }

    /// Number of distinct targets flagged for the current draw
    pub fn distinct(&self) -> u64 {
        self.reached.iter().filter(|&&flag| flag).count() as u64
    }

    pub fn solutions(&self, mode: CountingMode) -> u64 {
        match mode {
            CountingMode::Occurrences => self.snapshot(),
            CountingMode::DistinctTargets => self.distinct(),
        }
    }

    pub fn is_reached(&self, target: u64) -> bool {
        is_target(target) && self.reached.get(slot(target)).copied().unwrap_or(false)
    }

    pub fn is_empty(&self) -> bool {
        self.occurrences == 0
    }

    /// Reached targets in ascending order
    pub fn reached_targets(&self) -> impl Iterator<Item = u64> + '_ {
        self.reached
            .iter()
            .enumerate()
            .filter(|(_, flag)| **flag)
            .map(|(offset, _)| TARGET_MIN + offset as u64)
    }
}

impl Default for ReachabilitySet {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for ReachabilitySet {
    fn eq(&self, other: &Self) -> bool {
        self.occurrences == other.occurrences && self.reached == other.reached
    }
}

impl Eq for ReachabilitySet {}

#[inline]
fn slot(target: u64) -> usize {
    (target - TARGET_MIN) as usize
}
