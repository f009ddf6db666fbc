//! Workout persistence.
//!
//! Workouts are appended to a JSONL (JSON Lines) file with file locking
//! to ensure safe concurrent access.

use crate::{Result, Workout};
use fs2::FileExt;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Default page size for listings
pub const DEFAULT_LIST_LIMIT: usize = 10;

/// Durable storage for generated workouts
pub trait WorkoutStore {
    fn save(&self, workout: &Workout) -> Result<()>;

    /// Stored workouts, newest first, after skipping `offset`
    fn list(&self, limit: usize, offset: usize) -> Result<Vec<Workout>>;
}

/// JSONL-based workout store with file locking
pub struct JsonlStore {
    path: PathBuf,
}

impl JsonlStore {
    /// Create a new JSONL store for the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Ensure the parent directory exists
    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Ok(())
    }

    /// Every readable workout in file order. Unparseable lines are logged and dropped.
    fn load_all(&self) -> Result<Vec<Workout>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        file.lock_shared()?;

        let lines = BufReader::new(&file)
            .lines()
            .collect::<std::io::Result<Vec<String>>>()?;
        file.unlock()?;

        let workouts: Vec<Workout> = lines
            .iter()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .filter_map(|(idx, line)| match serde_json::from_str(line) {
                Ok(workout) => Some(workout),
                Err(e) => {
                    tracing::warn!("Skipping {:?} line {}: {}", self.path, idx + 1, e);
                    None
                }
            })
            .collect();

        tracing::debug!("Loaded {} workouts from {:?}", workouts.len(), self.path);
        Ok(workouts)
    }
}

impl WorkoutStore for JsonlStore {
    fn save(&self, workout: &Workout) -> Result<()> {
        self.ensure_parent_dir()?;

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        file.lock_exclusive()?;

        let mut line = serde_json::to_string(workout)?;
        line.push('\n');
        let written = (&file).write_all(line.as_bytes());
        file.unlock()?;
        written?;

        tracing::debug!("Saved workout {} to {:?}", workout.id, self.path);
        Ok(())
    }

    fn list(&self, limit: usize, offset: usize) -> Result<Vec<Workout>> {
        let mut workouts = self.load_all()?;
        workouts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(workouts.into_iter().skip(offset).take(limit).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Block, Level, GENERATOR_VERSION};
    use chrono::{Duration, Utc};
    use std::collections::BTreeMap;
    use uuid::Uuid;

    fn create_test_workout(seed: &str, minutes_ago: i64) -> Workout {
        let mut params = BTreeMap::new();
        params.insert("reps".to_string(), 12);
        Workout {
            id: Uuid::new_v4(),
            created_at: Utc::now() - Duration::minutes(minutes_ago),
            level: Level::Beginner,
            duration_min: 30,
            equipment: vec!["rower".into()],
            seed: seed.into(),
            blocks: vec![Block {
                name: "Row".into(),
                params,
            }],
            generator_version: GENERATOR_VERSION.into(),
        }
    }

    #[test]
    fn test_save_and_list_single_workout() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("data").join("workouts.jsonl");

        let workout = create_test_workout("s1", 0);
        let store = JsonlStore::new(&path);
        store.save(&workout).unwrap();

        let listed = store.list(DEFAULT_LIST_LIMIT, 0).unwrap();
        assert_eq!(listed, vec![workout]);
    }

    #[test]
    fn test_list_newest_first_with_paging() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = JsonlStore::new(temp_dir.path().join("workouts.jsonl"));

        // Oldest written first
        for (i, minutes_ago) in [50, 40, 30, 20, 10].iter().enumerate() {
            store
                .save(&create_test_workout(&format!("s{}", i), *minutes_ago))
                .unwrap();
        }

        let seeds = |ws: Vec<Workout>| ws.into_iter().map(|w| w.seed).collect::<Vec<_>>();

        assert_eq!(seeds(store.list(2, 0).unwrap()), vec!["s4", "s3"]);
        assert_eq!(seeds(store.list(2, 2).unwrap()), vec!["s2", "s1"]);
        assert_eq!(seeds(store.list(10, 4).unwrap()), vec!["s0"]);
        assert!(store.list(10, 5).unwrap().is_empty());
    }

    #[test]
    fn test_missing_file_lists_nothing() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = JsonlStore::new(temp_dir.path().join("nonexistent.jsonl"));
        assert!(store.list(DEFAULT_LIST_LIMIT, 0).unwrap().is_empty());
    }

    #[test]
    fn test_corrupt_lines_are_skipped() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("workouts.jsonl");

        let store = JsonlStore::new(&path);
        store.save(&create_test_workout("good-1", 2)).unwrap();

        let mut file = OpenOptions::new().append(true).open(&path).unwrap();
        writeln!(file, "{{ not json").unwrap();
        writeln!(file).unwrap();

        store.save(&create_test_workout("good-2", 1)).unwrap();

        let seeds: Vec<String> = store
            .list(DEFAULT_LIST_LIMIT, 0)
            .unwrap()
            .into_iter()
            .map(|w| w.seed)
            .collect();
        assert_eq!(seeds, vec!["good-2", "good-1"]);
    }

    #[test]
    fn test_generated_workout_roundtrips_through_store() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = JsonlStore::new(temp_dir.path().join("workouts.jsonl"));

        let request = crate::GenerationRequest {
            level: "Advanced".into(),
            duration_min: 60,
            equipment: vec!["sled".into()],
            seed: Some("persist".into()),
        };
        let workout = crate::generate(&request, crate::get_default_catalog()).unwrap();
        store.save(&workout).unwrap();

        let listed = store.list(1, 0).unwrap();
        assert_eq!(listed[0].id, workout.id);
        assert_eq!(listed[0].blocks, workout.blocks);
        assert_eq!(listed[0].level, Level::Advanced);
    }

    #[test]
    fn test_shared_store_saves_from_threads() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = std::sync::Arc::new(JsonlStore::new(temp_dir.path().join("workouts.jsonl")));

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let store = std::sync::Arc::clone(&store);
                std::thread::spawn(move || {
                    for j in 0..5 {
                        store
                            .save(&create_test_workout(&format!("t{}-{}", i, j), 0))
                            .unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.list(100, 0).unwrap().len(), 20);
    }
}
