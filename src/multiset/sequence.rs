use std::fmt;

use log::trace;

use crate::constants::DRAW_SIZE;
use crate::multiset::errors::MultisetError;

/// The numbers still available at one node of the search, largest first.
///
/// A multiset is never mutated once built: combining two of its numbers with
/// [`NumberMultiset::reduce`] produces a fresh, one-shorter copy, so sibling
/// branches of the search never observe each other's state.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NumberMultiset {
    values: Vec<u64>,
}

impl NumberMultiset {
    /// Build a multiset from up to six raw numbers in any order.
    ///
    /// # Errors
    ///
    /// Returns an error if `raw` is empty, holds more than six numbers,
    /// or contains a zero.
    pub fn build(raw: &[u64]) -> Result<Self, MultisetError> {
        if raw.is_empty() {
            return Err(MultisetError::Empty);
        }
        if raw.len() > DRAW_SIZE {
            return Err(MultisetError::TooManyValues {
                count: raw.len(),
                max: DRAW_SIZE,
            });
        }

        let mut values = Vec::with_capacity(raw.len());
        for &value in raw {
            if value == 0 {
                return Err(MultisetError::NonPositiveValue(value));
            }
            let position = values
                .iter()
                .position(|&existing| existing < value)
                .unwrap_or(values.len());
            values.insert(position, value);
        }

        trace!("Built multiset {:?} from {:?}", values, raw);
        Ok(Self { values })
    }

    /// Copy of `self` with the numbers at positions `i` and `j` replaced by
    /// `new_value`, which lands just before the first strictly smaller number.
    ///
    /// Requires `i < j < self.len()` and `new_value > 0`.
    pub fn reduce(&self, i: usize, j: usize, new_value: u64) -> Self {
        debug_assert!(i < j && j < self.values.len(), "invalid pair ({i}, {j})");
        debug_assert!(new_value > 0, "multiset values must stay positive");

        let mut values = Vec::with_capacity(self.values.len() - 1);
        let mut inserted = false;
        for (position, &value) in self.values.iter().enumerate() {
            if position == i || position == j {
                continue;
            }
            if !inserted && value < new_value {
                values.push(new_value);
                inserted = true;
            }
            values.push(value);
        }
        if !inserted {
            values.push(new_value);
        }

        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false for a built multiset; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<u64> {
        self.values.get(position).copied()
    }

    pub fn values(&self) -> &[u64] {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        self.values.iter().copied()
    }

    /// True when every number is at most the one before it
    pub fn is_sorted_descending(&self) -> bool {
        self.values
            .windows(2)
            .all(|pair| matches!(pair, [first, second] if first >= second))
    }
}

impl TryFrom<&[u64]> for NumberMultiset {
    type Error = MultisetError;

    fn try_from(raw: &[u64]) -> Result<Self, Self::Error> {
        Self::build(raw)
    }
}

impl fmt::Display for NumberMultiset {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[")?;
        for (position, value) in self.values.iter().enumerate() {
            if position > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "]")
    }
}
