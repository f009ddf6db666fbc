//! Block-count heuristic.
//!
//! A fixed step table: three duration breakpoints per level. The values are
//! product decisions, so they live here as data rather than a formula.

use crate::Level;

/// Number of blocks for a level and duration in minutes
pub fn block_count(level: Level, duration_min: u32) -> usize {
    match level {
        Level::Beginner => match duration_min {
            0..=25 => 4,
            26..=45 => 6,
            _ => 7,
        },
        Level::Intermediate => match duration_min {
            0..=30 => 5,
            31..=50 => 7,
            _ => 8,
        },
        Level::Advanced => match duration_min {
            0..=30 => 6,
            31..=60 => 8,
            _ => 10,
        },
    }
}
