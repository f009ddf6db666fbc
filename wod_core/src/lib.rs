#![forbid(unsafe_code)]

//! Core domain model and generation engine for wodgen.
//!
//! This crate provides:
//! - Domain types (levels, moves, requests, workouts)
//! - Catalog management
//! - Deterministic workout generation
//! - Workout persistence (JSONL store)
//! - Configuration and logging setup

pub mod types;
pub mod error;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod seed;
pub mod filter;
pub mod heuristic;
pub mod select;
pub mod params;
pub mod engine;
pub mod store;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use catalog::{build_default_catalog, get_default_catalog, Catalog};
pub use config::Config;
pub use engine::generate;
pub use store::{JsonlStore, WorkoutStore, DEFAULT_LIST_LIMIT};
