//! Seed hashing and PRNG derivation.
//!
//! A request's seed, level, duration and equipment are folded into a single
//! SHA-256 digest, and the first 8 bytes of that digest seed a ChaCha8
//! generator. Both the canonical string and the generator are part of the
//! reproducibility contract: changing either changes every stored plan.

use crate::Level;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Generator used for every workout
pub type WorkoutRng = ChaCha8Rng;

/// Hash the request inputs into a non-negative 63-bit seed.
///
/// Canonical form is `seed|level|duration|equipment`, with equipment joined by
/// commas in the order given. Reordering equipment changes the hash.
pub fn seed_hash(seed: &str, duration_min: u32, level: Level, equipment: &[String]) -> i64 {
    let canonical = format!(
        "{}|{}|{}|{}",
        seed,
        level.as_str(),
        duration_min,
        equipment.join(",")
    );

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    finalize_seed(hasher)
}

fn finalize_seed(hasher: Sha256) -> i64 {
    let digest = hasher.finalize();
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    (u64::from_le_bytes(bytes) & i64::MAX as u64) as i64
}

/// Seeded generator for one generation call
pub fn workout_rng(hash: i64) -> WorkoutRng {
    ChaCha8Rng::seed_from_u64(hash as u64)
}

/// Use the caller's seed verbatim, or mint a fresh one when absent or empty
pub fn resolve_seed(seed: Option<&str>) -> String {
    match seed {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => {
            let fresh = Uuid::new_v4().to_string();
            tracing::debug!("No seed supplied, generated {}", fresh);
            fresh
        }
    }
}
