//! Fixed domain constants for the numbers round

/// Smallest target a draw can be scored on
pub const TARGET_MIN: u64 = 100;
/// Largest target a draw can be scored on
pub const TARGET_MAX: u64 = 999;
/// Number of distinct targets in `TARGET_MIN..=TARGET_MAX`
pub const TARGET_COUNT: usize = (TARGET_MAX - TARGET_MIN + 1) as usize;

/// Numbers in one full draw
pub const DRAW_SIZE: usize = 6;
/// Large numbers available to a single pool
pub const POOL_SIZE: usize = 4;
/// Bounds a large number must lie in when the pool is customised
pub const LARGE_MIN: u64 = 11;
pub const LARGE_MAX: u64 = 100;
pub const DEFAULT_LARGES: [u64; POOL_SIZE] = [25, 50, 75, 100];

pub const SMALLS: [u64; 10] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
/// A small number may be drawn twice, and at most this many of them per draw
pub const MAX_PAIRS: usize = 2;

#[inline]
pub fn is_target(value: u64) -> bool {
    (TARGET_MIN..=TARGET_MAX).contains(&value)
}
