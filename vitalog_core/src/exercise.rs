//! Exercise session records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Broad kind of exercise
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseKind {
    Cardio,
    Strength,
    Flexibility,
    Sport,
    Walk,
}

crate::compat::legacy_enum_deserialize!(ExerciseKind,
    Cardio => "cardio",
    Strength => "strength",
    Flexibility => "flexibility",
    Sport => "sport",
    Walk => "walk",
);

impl ExerciseKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            ExerciseKind::Cardio => "Cardio",
            ExerciseKind::Strength => "Strength",
            ExerciseKind::Flexibility => "Flexibility",
            ExerciseKind::Sport => "Sport",
            ExerciseKind::Walk => "Walk",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            ExerciseKind::Cardio => "🏃",
            ExerciseKind::Strength => "🏋️",
            ExerciseKind::Flexibility => "🤸",
            ExerciseKind::Sport => "⚽",
            ExerciseKind::Walk => "🚶",
        }
    }

    pub fn examples(&self) -> &'static [&'static str] {
        match self {
            ExerciseKind::Cardio => &["Running", "Cycling", "Rowing"],
            ExerciseKind::Strength => &["Deadlifts", "Push-ups", "Kettlebell swings"],
            ExerciseKind::Flexibility => &["Yoga", "Static stretching"],
            ExerciseKind::Sport => &["Football", "Tennis", "Climbing"],
            ExerciseKind::Walk => &["Lunch walk", "Dog walk"],
        }
    }
}

/// One logged exercise session
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExerciseEntry {
    pub id: Uuid,
    pub kind: ExerciseKind,
    pub name: String,
    pub performed_at: DateTime<Utc>,
    pub duration_minutes: u32,
    /// Perceived effort 1-10, clamped on construction
    pub effort: u8,
    #[serde(default)]
    pub notes: Option<String>,
}

impl ExerciseEntry {
    pub fn new(
        kind: ExerciseKind,
        name: impl Into<String>,
        duration_minutes: u32,
        effort: u8,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            name: name.into(),
            performed_at: Utc::now(),
            duration_minutes,
            effort: effort.clamp(1, 10),
            notes: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}
