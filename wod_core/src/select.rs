//! Weighted move selection with an anti-repeat penalty.

use crate::Move;
use rand::Rng;

/// Weight multiplier applied to the move picked immediately before
pub const REPEAT_PENALTY: f64 = 0.1;

/// Cumulative-weight roulette over `candidates`.
///
/// The previous pick is discouraged, never forbidden. Returns `None` only
/// when `candidates` is empty.
pub fn weighted_pick<'a, R: Rng + ?Sized>(
    rng: &mut R,
    candidates: &[&'a Move],
    last: Option<&str>,
) -> Option<&'a Move> {
    let mut total = 0.0;
    let cumulative: Vec<f64> = candidates
        .iter()
        .map(|m| {
            let mut w = m.effective_weight();
            if last == Some(m.name.as_str()) {
                w *= REPEAT_PENALTY;
            }
            total += w;
            total
        })
        .collect();

    let x = rng.gen::<f64>() * total;
    cumulative
        .iter()
        .position(|&acc| x <= acc)
        .map(|i| candidates[i])
        // Rounding can leave x just past the final boundary
        .or_else(|| candidates.last().copied())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::workout_rng;

    fn weighted(name: &str, weight: f64) -> Move {
        let mut mv = Move::new(name);
        mv.weight = weight;
        mv
    }

    #[test]
    fn test_weighted_pick_prefers_heavy_move() {
        let a = weighted("A", 1.0);
        let b = weighted("B", 100.0);
        let avail = vec![&a, &b];
        let mut rng = workout_rng(42);

        let heavy = (0..1000)
            .filter(|_| weighted_pick(&mut rng, &avail, None).unwrap().name == "B")
            .count();
        assert!(heavy > 950, "weight-100 move picked only {} / 1000", heavy);
    }

    #[test]
    fn test_repeat_penalty_discourages_last_pick() {
        let a = weighted("A", 1.0);
        let b = weighted("B", 1.0);
        let avail = vec![&a, &b];
        let mut rng = workout_rng(7);

        let repeats = (0..2000)
            .filter(|_| weighted_pick(&mut rng, &avail, Some("A")).unwrap().name == "A")
            .count();
        // Expected share is 0.1 / 1.1, about 9%
        assert!(repeats < 400, "previous move re-picked {} / 2000 times", repeats);
        assert!(repeats > 0, "penalty must not forbid repetition");
    }

    #[test]
    fn test_single_candidate_always_returned() {
        let only = weighted("Only", 1.0);
        let avail = vec![&only];
        let mut rng = workout_rng(1);
        for _ in 0..20 {
            assert_eq!(
                weighted_pick(&mut rng, &avail, Some("Only")).unwrap().name,
                "Only"
            );
        }
    }

    #[test]
    fn test_empty_candidates() {
        let mut rng = workout_rng(1);
        assert!(weighted_pick(&mut rng, &[], None).is_none());
    }

    #[test]
    fn test_same_rng_state_same_pick() {
        let a = weighted("A", 1.0);
        let b = weighted("B", 2.0);
        let c = weighted("C", 3.0);
        let avail = vec![&a, &b, &c];

        let mut r1 = workout_rng(99);
        let mut r2 = workout_rng(99);
        for _ in 0..50 {
            assert_eq!(
                weighted_pick(&mut r1, &avail, Some("B")).unwrap().name,
                weighted_pick(&mut r2, &avail, Some("B")).unwrap().name
            );
        }
    }
}
