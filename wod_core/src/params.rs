//! Parameter sampling for a picked move.

use crate::ParamRanges;
use rand::Rng;
use std::collections::BTreeMap;

/// Emitted as `reps` when a move declares nothing for the level
pub const DEFAULT_REPS: i32 = 10;

/// Floor applied to every range minimum
pub const MIN_PARAM: i32 = 1;

/// Draw one concrete value per declared parameter.
///
/// Ranges are visited in parameter-name order so the draw sequence is stable.
/// The result always holds at least one entry.
pub fn sample_params<R: Rng + ?Sized>(
    rng: &mut R,
    ranges: Option<&ParamRanges>,
) -> BTreeMap<String, i32> {
    let mut out = BTreeMap::new();

    for (name, range) in ranges.into_iter().flatten() {
        let min = range.min.max(MIN_PARAM);
        let max = range.max.max(min);
        let value = if max > min {
            rng.gen_range(min..=max)
        } else {
            min
        };
        out.insert(name.clone(), value);
    }

    if out.is_empty() {
        out.insert("reps".to_string(), DEFAULT_REPS);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::workout_rng;
    use crate::ParamRange;

    fn single(name: &str, min: i32, max: i32) -> ParamRanges {
        let mut ranges = ParamRanges::new();
        ranges.insert(name.into(), ParamRange::new(min, max));
        ranges
    }

    #[test]
    fn test_missing_ranges_default_to_reps() {
        let mut rng = workout_rng(1);

        let got = sample_params(&mut rng, None);
        assert_eq!(got.len(), 1);
        assert_eq!(got["reps"], DEFAULT_REPS);

        let got = sample_params(&mut rng, Some(&ParamRanges::new()));
        assert_eq!(got["reps"], DEFAULT_REPS);
    }

    #[test]
    fn test_degenerate_range_is_fixed() {
        let mut rng = workout_rng(1);
        let ranges = single("reps", 5, 5);
        for _ in 0..20 {
            assert_eq!(sample_params(&mut rng, Some(&ranges))["reps"], 5);
        }
    }

    #[test]
    fn test_inverted_range_collapses_to_min() {
        let mut rng = workout_rng(1);
        let ranges = single("reps", 10, 5);
        for _ in 0..20 {
            assert_eq!(sample_params(&mut rng, Some(&ranges))["reps"], 10);
        }
    }

    #[test]
    fn test_min_clamped_to_one() {
        let mut rng = workout_rng(3);
        assert_eq!(sample_params(&mut rng, Some(&single("reps", -4, 0)))["reps"], 1);

        let ranges = single("reps", 0, 3);
        for _ in 0..50 {
            let v = sample_params(&mut rng, Some(&ranges))["reps"];
            assert!((1..=3).contains(&v), "value {} outside [1, 3]", v);
        }
    }

    #[test]
    fn test_values_stay_within_range() {
        let mut rng = workout_rng(11);
        let mut ranges = single("meters", 200, 400);
        ranges.insert("reps".into(), ParamRange::new(8, 12));

        for _ in 0..200 {
            let got = sample_params(&mut rng, Some(&ranges));
            assert_eq!(got.len(), 2);
            assert!((200..=400).contains(&got["meters"]));
            assert!((8..=12).contains(&got["reps"]));
        }
    }

    #[test]
    fn test_range_endpoints_reachable() {
        let mut rng = workout_rng(5);
        let ranges = single("reps", 1, 2);
        let seen: std::collections::HashSet<i32> = (0..100)
            .map(|_| sample_params(&mut rng, Some(&ranges))["reps"])
            .collect();
        assert!(seen.contains(&1) && seen.contains(&2));
    }
}
