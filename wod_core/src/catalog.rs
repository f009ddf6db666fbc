//! Move catalog: the built-in defaults plus TOML loading and validation.
//!
//! A catalog is loaded once and then only ever read. Generation borrows it,
//! so any number of callers may share one instance.

use crate::types::*;
use crate::{Error, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Cached default catalog - built once and reused across all operations
static DEFAULT_CATALOG: Lazy<Catalog> = Lazy::new(build_default_catalog);

/// Get a reference to the cached default catalog
pub fn get_default_catalog() -> &'static Catalog {
    &DEFAULT_CATALOG
}

/// Ordered collection of moves
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    #[serde(default)]
    pub moves: Vec<Move>,
}

impl Catalog {
    /// Build a catalog, normalizing unset or zero weights to 1.0
    pub fn new(mut moves: Vec<Move>) -> Self {
        for mv in &mut moves {
            mv.weight = mv.effective_weight();
        }
        Self { moves }
    }

    /// Parse a catalog from TOML text
    ///
    /// ```toml
    /// [[moves]]
    /// name = "Row"
    /// needs_one_of = ["rower"]
    /// weight = 1.0
    ///
    /// [moves.ranges.beginner]
    /// meters = [250, 500]
    /// ```
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let parsed: Catalog = toml::from_str(raw)?;
        Ok(Self::new(parsed.moves))
    }

    /// Load a catalog from a TOML file
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let catalog = Self::from_toml_str(&contents)?;
        tracing::info!("Loaded {} moves from {:?}", catalog.len(), path);
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Move> {
        self.moves.iter().find(|m| m.name == name)
    }

    /// Validate the catalog for consistency
    ///
    /// Returns a list of validation errors, or empty Vec if valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        let mut seen = HashSet::new();

        for mv in &self.moves {
            if mv.name.trim().is_empty() {
                errors.push("Move has empty name".to_string());
            } else if !seen.insert(mv.name.as_str()) {
                errors.push(format!("Duplicate move name '{}'", mv.name));
            }

            if !mv.weight.is_finite() || mv.weight < 0.0 {
                errors.push(format!(
                    "Move '{}' has invalid weight {}",
                    mv.name, mv.weight
                ));
            }

            for tag in &mv.needs_one_of {
                if tag.trim().is_empty() {
                    errors.push(format!("Move '{}' has an empty equipment tag", mv.name));
                }
            }

            for (level, ranges) in &mv.ranges {
                if Level::parse(level).is_err() {
                    errors.push(format!(
                        "Move '{}' declares ranges for unknown level '{}'",
                        mv.name, level
                    ));
                }
                for param in ranges.keys() {
                    if param.trim().is_empty() {
                        errors.push(format!(
                            "Move '{}' has an empty parameter name at level '{}'",
                            mv.name, level
                        ));
                    }
                }
            }
        }

        errors
    }

    /// Validate and turn any findings into a single error
    pub fn ensure_valid(&self) -> Result<()> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(Error::CatalogValidation(errors.join("; ")))
        }
    }
}

fn ranges(
    param: &str,
    beginner: [i32; 2],
    intermediate: [i32; 2],
    advanced: [i32; 2],
) -> std::collections::BTreeMap<String, ParamRanges> {
    [
        (Level::Beginner, beginner),
        (Level::Intermediate, intermediate),
        (Level::Advanced, advanced),
    ]
    .into_iter()
    .map(|(level, range)| {
        let mut by_param = ParamRanges::new();
        by_param.insert(param.to_string(), range.into());
        (level.as_str().to_string(), by_param)
    })
    .collect()
}

fn gated(name: &str, needs: &[&str], tags: &[&str], weight: f64) -> Move {
    Move {
        name: name.into(),
        needs_one_of: needs.iter().map(|s| s.to_string()).collect(),
        tags: tags.iter().map(|s| s.to_string()).collect(),
        weight,
        ranges: Default::default(),
    }
}

/// Builds the default catalog with built-in moves
///
/// **Note**: For production use, prefer `get_default_catalog()` which returns a
/// cached reference.
pub fn build_default_catalog() -> Catalog {
    let moves = vec![
        Move {
            ranges: ranges("meters", [200, 400], [400, 800], [800, 1200]),
            ..gated("Run", &[], &["cardio"], 1.0)
        },
        Move {
            ranges: ranges("meters", [250, 500], [500, 750], [750, 1000]),
            ..gated("SkiErg", &["skierg"], &["cardio", "pull"], 1.0)
        },
        Move {
            ranges: ranges("meters", [250, 500], [500, 750], [750, 1000]),
            ..gated("Row", &["rower"], &["cardio", "pull"], 1.0)
        },
        Move {
            ranges: ranges("meters", [10, 20], [20, 30], [25, 50]),
            ..gated("Sled Push", &["sled"], &["strength", "push"], 0.8)
        },
        Move {
            ranges: ranges("meters", [10, 20], [20, 30], [25, 50]),
            ..gated("Sled Pull", &["sled"], &["strength", "pull"], 0.8)
        },
        Move {
            ranges: ranges("reps", [5, 10], [10, 15], [15, 25]),
            ..gated("Burpee Broad Jumps", &[], &["cardio", "full_body"], 1.0)
        },
        Move {
            ranges: ranges("meters", [20, 40], [40, 80], [80, 120]),
            ..gated(
                "Farmers Carry",
                &["kettlebell", "dumbbell"],
                &["strength", "grip"],
                0.8,
            )
        },
        Move {
            ranges: ranges("meters", [10, 20], [20, 40], [40, 60]),
            ..gated("Sandbag Lunges", &["sandbag"], &["strength", "legs"], 0.8)
        },
        Move {
            ranges: ranges("reps", [10, 20], [20, 30], [30, 50]),
            ..gated(
                "Wall Balls",
                &["wall_ball", "medicine_ball"],
                &["full_body"],
                1.2,
            )
        },
        Move {
            ranges: ranges("reps", [6, 10], [8, 12], [10, 16]),
            ..gated("DB Snatch", &["dumbbell"], &["strength", "full_body"], 1.0)
        },
        Move {
            ranges: ranges("reps", [5, 10], [10, 20], [20, 30]),
            ..gated("Push-ups", &[], &["push", "bodyweight"], 1.0)
        },
        Move {
            ranges: ranges("reps", [10, 20], [20, 30], [30, 50]),
            ..gated("Air Squats", &[], &["legs", "bodyweight"], 1.0)
        },
    ];

    Catalog::new(moves)
}
