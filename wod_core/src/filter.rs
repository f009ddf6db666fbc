//! Equipment filtering.
//!
//! Moves with no requirement always pass. A gated move passes when any of its
//! tags matches the caller's equipment, compared trimmed and case-insensitive.

use crate::Move;
use std::collections::HashSet;

fn normalize(tag: &str) -> String {
    tag.trim().to_lowercase()
}

/// Moves usable with the given equipment
pub fn filter_by_equipment<'a>(moves: &'a [Move], equipment: &[String]) -> Vec<&'a Move> {
    let available: HashSet<String> = equipment
        .iter()
        .map(|e| normalize(e))
        .filter(|e| !e.is_empty())
        .collect();

    moves
        .iter()
        .filter(|m| {
            !m.needs_equipment()
                || m.needs_one_of
                    .iter()
                    .any(|need| available.contains(&normalize(need)))
        })
        .collect()
}

/// Moves that need no equipment at all
pub fn filter_no_equipment(moves: &[Move]) -> Vec<&Move> {
    moves.iter().filter(|m| !m.needs_equipment()).collect()
}
