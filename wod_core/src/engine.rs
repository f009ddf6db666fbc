//! Workout generation engine.
//!
//! Ties the pieces together for one request:
//! 1. Validate level, duration and catalog
//! 2. Resolve the seed and derive the PRNG from it
//! 3. Filter moves by equipment, falling back to bodyweight moves
//! 4. Pick moves and sample their parameters, one block at a time
//!
//! Identical level, duration, equipment order and seed against the same
//! catalog always yield the same blocks. The engine does no I/O and keeps no
//! state between calls.

use crate::filter::{filter_by_equipment, filter_no_equipment};
use crate::heuristic::block_count;
use crate::params::sample_params;
use crate::seed::{resolve_seed, seed_hash, workout_rng};
use crate::select::weighted_pick;
use crate::{
    Block, Catalog, Error, GenerationRequest, Level, Move, Result, Workout, GENERATOR_VERSION,
    MAX_DURATION, MIN_DURATION,
};
use chrono::Utc;
use uuid::Uuid;

/// Generate a workout for `request` from `catalog`
pub fn generate(request: &GenerationRequest, catalog: &Catalog) -> Result<Workout> {
    let level = Level::parse(&request.level)?;

    if !(MIN_DURATION..=MAX_DURATION).contains(&request.duration_min) {
        return Err(Error::InvalidDuration(request.duration_min));
    }

    if catalog.is_empty() {
        return Err(Error::EmptyCatalog);
    }

    let seed = resolve_seed(request.seed.as_deref());
    let blocks = build_blocks(
        &seed,
        level,
        request.duration_min,
        &request.equipment,
        catalog,
    )?;

    tracing::info!(
        "Generated {} workout: {} min, {} blocks, seed {}",
        level,
        request.duration_min,
        blocks.len(),
        seed
    );

    Ok(Workout {
        id: Uuid::new_v4(),
        created_at: Utc::now(),
        level,
        duration_min: request.duration_min,
        equipment: request.equipment.clone(),
        seed,
        blocks,
        generator_version: GENERATOR_VERSION.to_string(),
    })
}

/// The deterministic part of generation: everything after validation
fn build_blocks(
    seed: &str,
    level: Level,
    duration_min: u32,
    equipment: &[String],
    catalog: &Catalog,
) -> Result<Vec<Block>> {
    let hash = seed_hash(seed, duration_min, level, equipment);
    let mut rng = workout_rng(hash);
    tracing::debug!("Seed {:?} hashed to {}", seed, hash);

    let candidates = usable_moves(catalog, equipment)?;
    let count = block_count(level, duration_min);
    tracing::debug!(
        "{} candidate moves, {} blocks for {} / {} min",
        candidates.len(),
        count,
        level,
        duration_min
    );

    let mut blocks = Vec::with_capacity(count);
    let mut last: Option<&str> = None;
    for _ in 0..count {
        let picked = weighted_pick(&mut rng, &candidates, last).ok_or(Error::NoUsableMoves)?;
        last = Some(picked.name.as_str());
        blocks.push(Block {
            name: picked.name.clone(),
            params: sample_params(&mut rng, picked.ranges_for(level)),
        });
    }

    Ok(blocks)
}

/// Equipment-filtered moves, or bodyweight moves when nothing matches
fn usable_moves<'a>(catalog: &'a Catalog, equipment: &[String]) -> Result<Vec<&'a Move>> {
    let matched = filter_by_equipment(&catalog.moves, equipment);
    if !matched.is_empty() {
        return Ok(matched);
    }

    tracing::warn!(
        "No moves match equipment {:?}, falling back to bodyweight moves",
        equipment
    );
    let fallback = filter_no_equipment(&catalog.moves);
    if fallback.is_empty() {
        return Err(Error::NoUsableMoves);
    }
    Ok(fallback)
}
