//! Core domain types for the workout generator.
//!
//! This module defines the fundamental types used throughout the system:
//! - Skill levels and parameter ranges
//! - Moves (catalog entries)
//! - Generation requests
//! - Generated workouts and their blocks

use crate::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use uuid::Uuid;

/// Shortest workout the generator accepts, in minutes
pub const MIN_DURATION: u32 = 15;

/// Longest workout the generator accepts, in minutes
pub const MAX_DURATION: u32 = 120;

/// Version tag stamped on every generated workout
pub const GENERATOR_VERSION: &str = "v1";

// ============================================================================
// Level
// ============================================================================

/// Skill tier of a workout
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Beginner, Level::Intermediate, Level::Advanced];

    /// Parse a level case-insensitively.
    ///
    /// The raw input is kept in the error so callers can echo it back.
    pub fn parse(raw: &str) -> Result<Self> {
        match raw.to_lowercase().as_str() {
            "beginner" => Ok(Level::Beginner),
            "intermediate" => Ok(Level::Intermediate),
            "advanced" => Ok(Level::Advanced),
            _ => Err(Error::InvalidLevel(raw.to_string())),
        }
    }

    /// Canonical lower-case name
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Beginner => "beginner",
            Level::Intermediate => "intermediate",
            Level::Advanced => "advanced",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Level {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Level::parse(s)
    }
}

// ============================================================================
// Catalog entries
// ============================================================================

/// Inclusive integer range for one parameter, written `[min, max]` in catalogs
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "[i32; 2]", into = "[i32; 2]")]
pub struct ParamRange {
    pub min: i32,
    pub max: i32,
}

impl ParamRange {
    pub fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }
}

impl From<[i32; 2]> for ParamRange {
    fn from([min, max]: [i32; 2]) -> Self {
        Self { min, max }
    }
}

impl From<ParamRange> for [i32; 2] {
    fn from(range: ParamRange) -> Self {
        [range.min, range.max]
    }
}

/// Parameter name -> range, ordered by name
pub type ParamRanges = BTreeMap<String, ParamRange>;

/// Weight for moves that leave it unset
pub const DEFAULT_WEIGHT: f64 = 1.0;

fn default_weight() -> f64 {
    DEFAULT_WEIGHT
}

/// A single exercise definition (e.g., "Wall Balls")
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Move {
    pub name: String,

    /// Equipment tags, any one of which makes the move usable. Empty = bodyweight.
    #[serde(default)]
    pub needs_one_of: Vec<String>,

    #[serde(default)]
    pub tags: Vec<String>,

    /// Selection weight; unset or zero counts as 1.0
    #[serde(default = "default_weight")]
    pub weight: f64,

    /// Level name -> parameter ranges
    #[serde(default)]
    pub ranges: BTreeMap<String, ParamRanges>,
}

impl Move {
    /// A bodyweight move with weight 1.0 and no ranges
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            needs_one_of: Vec::new(),
            tags: Vec::new(),
            weight: DEFAULT_WEIGHT,
            ranges: BTreeMap::new(),
        }
    }

    /// Weight used by selection, with zero read as 1.0
    pub fn effective_weight(&self) -> f64 {
        if self.weight == 0.0 {
            DEFAULT_WEIGHT
        } else {
            self.weight
        }
    }

    pub fn needs_equipment(&self) -> bool {
        !self.needs_one_of.is_empty()
    }

    /// Parameter ranges declared for a level, if any
    pub fn ranges_for(&self, level: Level) -> Option<&ParamRanges> {
        self.ranges.get(level.as_str())
    }
}

// ============================================================================
// Requests and results
// ============================================================================

/// Input to a single generation call
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Skill level, matched case-insensitively
    pub level: String,
    pub duration_min: u32,
    /// Equipment in caller order; order participates in seed hashing
    #[serde(default)]
    pub equipment: Vec<String>,
    #[serde(default)]
    pub seed: Option<String>,
}

impl GenerationRequest {
    pub fn new(level: impl Into<String>, duration_min: u32) -> Self {
        Self {
            level: level.into(),
            duration_min,
            equipment: Vec::new(),
            seed: None,
        }
    }
}

/// One instantiated exercise within a workout
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Block {
    pub name: String,
    pub params: BTreeMap<String, i32>,
}

/// A generated workout
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Workout {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub level: Level,
    pub duration_min: u32,
    #[serde(default)]
    pub equipment: Vec<String>,
    pub seed: String,
    pub blocks: Vec<Block>,
    #[serde(default = "default_generator_version")]
    pub generator_version: String,
}

fn default_generator_version() -> String {
    GENERATOR_VERSION.to_string()
}
