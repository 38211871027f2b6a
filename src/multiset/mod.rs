//! Sorted-descending multiset of draw numbers, reduced copy-on-write by the search

mod sequence;
mod errors;

pub use sequence::NumberMultiset;
pub use errors::MultisetError;
