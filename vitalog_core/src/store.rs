//! Tracker state persistence with file locking.
//!
//! Habits, goals, todos, and medications live in a single state file that is
//! replaced wholesale on every save. Saves are atomic (temp file, fsync,
//! rename) so a crash never leaves a half-written state behind.

use crate::{Error, Goal, Habit, Medication, Result, Todo};
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use uuid::Uuid;

/// All record-style (non-append-only) trackers, keyed by id
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct TrackerState {
    #[serde(default)]
    pub habits: HashMap<Uuid, Habit>,
    #[serde(default)]
    pub goals: HashMap<Uuid, Goal>,
    #[serde(default)]
    pub todos: HashMap<Uuid, Todo>,
    #[serde(default)]
    pub medications: HashMap<Uuid, Medication>,
}

impl TrackerState {
    /// Load tracker state from a file with shared locking
    ///
    /// Returns default state if the file doesn't exist.
    /// If the file is corrupted, logs a warning and returns default state.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::info!("No state file found, using default state");
            return Ok(Self::default());
        }

        let file = match File::open(path) {
            Ok(f) => f,
            Err(e) => {
                tracing::warn!(
                    "Unable to open state file {:?}: {}. Using defaults.",
                    path,
                    e
                );
                return Ok(Self::default());
            }
        };

        // Acquire shared lock for reading
        if let Err(e) = file.lock_shared() {
            tracing::warn!(
                "Unable to lock state file {:?}: {}. Using defaults.",
                path,
                e
            );
            return Ok(Self::default());
        }

        let mut contents = String::new();
        let mut reader = std::io::BufReader::new(&file);
        if let Err(e) = reader.read_to_string(&mut contents) {
            let _ = file.unlock();
            tracing::warn!(
                "Failed to read state file {:?}: {}. Using defaults.",
                path,
                e
            );
            return Ok(Self::default());
        }

        file.unlock()?;

        match serde_json::from_str::<TrackerState>(&contents) {
            Ok(state) => {
                tracing::debug!("Loaded tracker state from {:?}", path);
                Ok(state)
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to parse state file {:?}: {}. Using defaults.",
                    path,
                    e
                );
                Ok(Self::default())
            }
        }
    }

    /// Save tracker state to a file with exclusive locking
    ///
    /// Atomically writes state by:
    /// 1. Writing to a temp file
    /// 2. Syncing to disk
    /// 3. Renaming over the original
    pub fn save(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        // Create unique temp file in the same directory for atomic rename
        let temp = NamedTempFile::new_in(path.parent().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::Other, "state path missing parent")
        })?)?;

        // Acquire exclusive lock on the temp file to serialize concurrent writers
        temp.as_file().lock_exclusive()?;

        {
            let mut writer = std::io::BufWriter::new(temp.as_file());
            let contents = serde_json::to_string(self)?;
            writer.write_all(contents.as_bytes())?;
            writer.flush()?;
        }

        temp.as_file().sync_all()?;
        temp.as_file().unlock()?;

        // Atomically replace old state file
        temp.persist(path).map_err(|e| Error::Io(e.error))?;

        tracing::debug!("Saved tracker state to {:?}", path);
        Ok(())
    }

    /// Load state, modify it, and save it back atomically
    ///
    /// This is a convenience method that handles the load-modify-save pattern
    /// with proper error handling.
    pub fn update<F>(path: &Path, f: F) -> Result<Self>
    where
        F: FnOnce(&mut TrackerState) -> Result<()>,
    {
        let mut state = Self::load(path)?;
        f(&mut state)?;
        state.save(path)?;
        Ok(state)
    }

    /// Insert a habit, returning its id
    pub fn add_habit(&mut self, habit: Habit) -> Uuid {
        let id = habit.id;
        self.habits.insert(id, habit);
        id
    }

    /// Insert a goal, returning its id
    pub fn add_goal(&mut self, goal: Goal) -> Uuid {
        let id = goal.id;
        self.goals.insert(id, goal);
        id
    }

    /// Find a habit by name (case-insensitive), ignoring archived ones
    pub fn find_habit_by_name(&self, name: &str) -> Option<&Habit> {
        self.habits
            .values()
            .filter(|h| !h.archived)
            .find(|h| h.name.eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::habit::{HabitCategory, HabitFrequency};
    use crate::GoalStatus;

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let state_path = temp_dir.path().join("state.json");

        let mut state = TrackerState::default();
        let habit_id = state.add_habit(Habit::new(
            "Meditate",
            HabitCategory::Mindfulness,
            HabitFrequency::Daily,
        ));
        state.add_goal(Goal::new("Run a 10k").with_status(GoalStatus::Paused));

        state.save(&state_path).unwrap();
        let loaded = TrackerState::load(&state_path).unwrap();

        assert_eq!(loaded.habits.len(), 1);
        assert!(loaded.habits.contains_key(&habit_id));
        assert_eq!(loaded.goals.len(), 1);
        // is_active mirror repaired on load
        assert!(loaded.goals.values().all(|g| !g.is_active));
    }

    #[test]
    fn test_load_nonexistent_returns_default() {
        let temp_dir = tempfile::tempdir().unwrap();
        let state = TrackerState::load(&temp_dir.path().join("nonexistent.json")).unwrap();
        assert!(state.habits.is_empty());
        assert!(state.goals.is_empty());
    }

    #[test]
    fn test_corrupted_state_returns_default() {
        crate::logging::init_test();
        let temp_dir = tempfile::tempdir().unwrap();
        let state_path = temp_dir.path().join("corrupted.json");
        std::fs::write(&state_path, "{ invalid json }").unwrap();

        let state = TrackerState::load(&state_path).unwrap();
        assert!(state.habits.is_empty());
    }

    #[test]
    fn test_update_pattern() {
        let temp_dir = tempfile::tempdir().unwrap();
        let state_path = temp_dir.path().join("state.json");

        TrackerState::default().save(&state_path).unwrap();

        TrackerState::update(&state_path, |state| {
            state.add_habit(Habit::new(
                "Stretch",
                HabitCategory::Fitness,
                HabitFrequency::Daily,
            ));
            Ok(())
        })
        .unwrap();

        let loaded = TrackerState::load(&state_path).unwrap();
        assert!(loaded.find_habit_by_name("stretch").is_some());
    }

    #[test]
    fn test_find_habit_ignores_archived() {
        let mut state = TrackerState::default();
        let mut habit = Habit::new("Old habit", HabitCategory::Health, HabitFrequency::Daily);
        habit.archive();
        state.add_habit(habit);

        assert!(state.find_habit_by_name("Old habit").is_none());
    }

    #[test]
    fn test_atomic_save() {
        let temp_dir = tempfile::tempdir().unwrap();
        let state_path = temp_dir.path().join("state.json");

        TrackerState::default().save(&state_path).unwrap();

        // Verify state file exists and no stray temp files remain
        assert!(state_path.exists());
        let extras: Vec<_> = std::fs::read_dir(temp_dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name() != "state.json")
            .collect();
        assert!(
            extras.is_empty(),
            "Expected only state.json, found extras: {:?}",
            extras
        );
    }
}
