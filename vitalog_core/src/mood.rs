//! Mood levels and journal entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Five-point mood scale
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum MoodLevel {
    VeryLow,
    Low,
    Neutral,
    High,
    VeryHigh,
}

crate::compat::legacy_enum_deserialize!(MoodLevel,
    VeryLow => "very_low",
    Low => "low",
    Neutral => "neutral",
    High => "high",
    VeryHigh => "very_high",
);

impl MoodLevel {
    pub fn display_name(&self) -> &'static str {
        match self {
            MoodLevel::VeryLow => "Very low",
            MoodLevel::Low => "Low",
            MoodLevel::Neutral => "Neutral",
            MoodLevel::High => "High",
            MoodLevel::VeryHigh => "Very high",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            MoodLevel::VeryLow => "😞",
            MoodLevel::Low => "🙁",
            MoodLevel::Neutral => "😐",
            MoodLevel::High => "🙂",
            MoodLevel::VeryHigh => "😄",
        }
    }

    /// Numeric score, 1 through 5
    pub fn score(&self) -> i8 {
        match self {
            MoodLevel::VeryLow => 1,
            MoodLevel::Low => 2,
            MoodLevel::Neutral => 3,
            MoodLevel::High => 4,
            MoodLevel::VeryHigh => 5,
        }
    }

    /// Map a numeric score back to a level, clamping out-of-range values
    pub fn from_score(score: i8) -> Self {
        match score {
            i8::MIN..=1 => MoodLevel::VeryLow,
            2 => MoodLevel::Low,
            3 => MoodLevel::Neutral,
            4 => MoodLevel::High,
            _ => MoodLevel::VeryHigh,
        }
    }
}

/// A journal entry with mood captured before and optionally after writing
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: Uuid,
    pub recorded_at: DateTime<Utc>,
    pub mood_before: MoodLevel,
    #[serde(default)]
    pub mood_after: Option<MoodLevel>,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl JournalEntry {
    pub fn new(mood_before: MoodLevel, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            recorded_at: Utc::now(),
            mood_before,
            mood_after: None,
            text: text.into(),
            tags: Vec::new(),
        }
    }

    pub fn with_mood_after(mut self, mood: MoodLevel) -> Self {
        self.mood_after = Some(mood);
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Score delta from before to after writing, if an after-mood was recorded
    pub fn mood_change(&self) -> Option<i8> {
        self.mood_after
            .map(|after| after.score() - self.mood_before.score())
    }
}
