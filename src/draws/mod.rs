//! Enumeration of every admissible draw and the sweep that scores them

mod combinations;
mod config;
mod enumerator;
mod errors;
mod sweep;

pub use combinations::{binomial, combinations};
pub use config::SweepConfig;
pub use enumerator::{Draw, DrawEnumerator};
pub use errors::DrawError;
pub use sweep::{BucketProgress, Sweep};
