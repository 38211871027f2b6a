use log::{debug, trace};

use crate::multiset::NumberMultiset;
use crate::search::operation::Operation;
use crate::stats::ReachabilitySet;

/// Recursive exhaustive search over every pair and operator of a multiset.
///
/// Every valid result in `100..=999` is marked on the recorder, and every
/// valid result (target or not) is pushed back into a reduced copy of the
/// multiset that is searched in turn, down to a single number.
#[derive(Debug, Default)]
pub struct Combiner {
    nodes: u64,
    evaluations: u64,
}

impl Combiner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Search `multiset`, marking reached targets on `recorder`
    pub fn combine(&mut self, multiset: &NumberMultiset, recorder: &mut ReachabilitySet) {
        self.nodes += 1;
        let size = multiset.len();
        if size < 2 {
            return;
        }

        let values = multiset.values();
        for (i, &larger) in values.iter().enumerate() {
            for (offset, &smaller) in values.iter().skip(i + 1).enumerate() {
                let j = i + 1 + offset;
                for operation in Operation::ALL {
                    self.evaluations += 1;
                    let Some(result) = operation.apply(larger, smaller) else {
                        continue;
                    };
                    if recorder.mark(result) {
                        trace!("{} {} {} = {}", larger, operation, smaller, result);
                    }
                    if size > 2 {
                        let reduced = multiset.reduce(i, j, result);
                        self.combine(&reduced, recorder);
                    }
                }
            }
        }
    }

    /// Multisets visited, including size-one leaves
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Operator applications attempted, valid or not
    pub fn evaluations(&self) -> u64 {
        self.evaluations
    }
}

/// Search one multiset with a throwaway [`Combiner`]
pub fn combine(multiset: &NumberMultiset, recorder: &mut ReachabilitySet) {
    let mut combiner = Combiner::new();
    combiner.combine(multiset, recorder);
    debug!(
        "Searched {}: {} nodes, {} evaluations, {} occurrences",
        multiset,
        combiner.nodes(),
        combiner.evaluations(),
        recorder.snapshot()
    );
}
