#![forbid(unsafe_code)]

//! Core domain model for the Vitalog wellness tracker.
//!
//! This crate provides:
//! - Domain records (habits, goals, todos, journal/mood, food, fasting,
//!   medication, exercise, meditation, weight)
//! - Unit conversion and streak computation
//! - Backward-compatible JSON serialization
//! - Persistence (JSONL journals, tracker state, CSV export)
//! - Built-in template catalog

pub mod compat;
pub mod config;
pub mod csv_export;
pub mod error;
pub mod exercise;
pub mod fasting;
pub mod goal;
pub mod habit;
pub mod journal;
pub mod logging;
pub mod medication;
pub mod meditation;
pub mod mood;
pub mod nutrition;
pub mod store;
pub mod streak;
pub mod templates;
pub mod todo;
pub mod units;
pub mod weight;

// Re-export commonly used types
pub use config::Config;
pub use error::{Error, Result};
pub use exercise::{ExerciseEntry, ExerciseKind};
pub use fasting::FastingEntry;
pub use goal::{Goal, GoalStatus, Milestone};
pub use habit::{Habit, HabitCategory, HabitFrequency, HabitMaturity};
pub use journal::{EntrySink, JsonlJournal};
pub use medication::{DosageConstraint, Medication, MedicationLog, MedicationStatus};
pub use meditation::{MeditationEntry, MeditationKind};
pub use mood::{JournalEntry, MoodLevel};
pub use nutrition::{daily_totals, FoodEntry, FoodTemplate, MealType, NutritionFacts};
pub use store::TrackerState;
pub use templates::{build_builtin_catalog, get_builtin_catalog, TemplateCatalog};
pub use todo::{Todo, TodoPriority};
pub use units::{convert_serving, convert_weight, ServingUnit, StonesAndPounds, WeightUnit};
pub use weight::WeightEntry;
