use std::fmt;

use log::{debug, info};

use crate::constants::{DRAW_SIZE, TARGET_MAX, TARGET_MIN, is_target};
use crate::multiset::NumberMultiset;
use crate::search::errors::SolveError;
use crate::search::operation::Operation;

/// One combination of two available numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub lhs: u64,
    pub operation: Operation,
    pub rhs: u64,
    pub result: u64,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} = {}",
            self.lhs, self.operation, self.rhs, self.result
        )
    }
}

/// A chain of steps whose last result is the target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    steps: Vec<Step>,
}

impl Solution {
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn result(&self) -> Option<u64> {
        self.steps.last().map(|step| step.result)
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (position, step) in self.steps.iter().enumerate() {
            if position > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", step)?;
        }
        Ok(())
    }
}

/// Find a shortest chain of operations on `values` that produces `target`.
///
/// Chains are searched by increasing length, so the returned one never
/// contains a step that does not feed the final result. A target that is
/// already one of the `values` still needs at least one operation.
///
/// # Errors
///
/// Returns an error if `target` is outside `100..=999` or `values` is not a
/// valid draw.
pub fn solve(values: &[u64], target: u64) -> Result<Option<Solution>, SolveError> {
    if !is_target(target) {
        return Err(SolveError::TargetOutOfRange {
            target,
            min: TARGET_MIN,
            max: TARGET_MAX,
        });
    }
    let multiset = NumberMultiset::build(values)?;

    info!("Solving {} for {}", multiset, target);

    let mut steps = Vec::with_capacity(DRAW_SIZE - 1);
    for max_steps in 1..multiset.len() {
        debug!("Trying chains of up to {} steps", max_steps);
        if search(&multiset, target, max_steps, &mut steps) {
            info!("Found {}-step solution", steps.len());
            return Ok(Some(Solution { steps }));
        }
    }

    info!("No solution for {} in {}", target, multiset);
    Ok(None)
}

fn search(multiset: &NumberMultiset, target: u64, steps_left: usize, steps: &mut Vec<Step>) -> bool {
    if steps_left == 0 || multiset.len() < 2 {
        return false;
    }

    let values = multiset.values();
    for (i, &lhs) in values.iter().enumerate() {
        for (offset, &rhs) in values.iter().skip(i + 1).enumerate() {
            let j = i + 1 + offset;
            for operation in Operation::ALL {
                let Some(result) = operation.apply(lhs, rhs) else {
                    continue;
                };
                steps.push(Step {
                    lhs,
                    operation,
                    rhs,
                    result,
                });
                if result == target {
                    return true;
                }
                if search(&multiset.reduce(i, j, result), target, steps_left - 1, steps) {
                    return true;
                }
                steps.pop();
            }
        }
    }
    false
}
