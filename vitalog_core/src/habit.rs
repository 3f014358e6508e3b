//! Habit records, categories, and maturity progression.
//!
//! A habit collects completion dates and derives its streaks from them.
//! Maturity is deliberately sticky: `suggested_maturity` says what the streak
//! has earned, but the stored stage only advances through an explicit
//! `graduate()` call, so a missed week never silently demotes a habit.

use crate::streak;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Life area a habit belongs to
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum HabitCategory {
    Health,
    Fitness,
    Mindfulness,
    Productivity,
    Learning,
    Social,
}

crate::compat::legacy_enum_deserialize!(HabitCategory,
    Health => "health",
    Fitness => "fitness",
    Mindfulness => "mindfulness",
    Productivity => "productivity",
    Learning => "learning",
    Social => "social",
);

impl HabitCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            HabitCategory::Health => "Health",
            HabitCategory::Fitness => "Fitness",
            HabitCategory::Mindfulness => "Mindfulness",
            HabitCategory::Productivity => "Productivity",
            HabitCategory::Learning => "Learning",
            HabitCategory::Social => "Social",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            HabitCategory::Health => "🩺",
            HabitCategory::Fitness => "💪",
            HabitCategory::Mindfulness => "🧘",
            HabitCategory::Productivity => "📋",
            HabitCategory::Learning => "📚",
            HabitCategory::Social => "👥",
        }
    }

    /// Example habits shown when the user creates a new one
    pub fn examples(&self) -> &'static [&'static str] {
        match self {
            HabitCategory::Health => &["Drink 2L of water", "Sleep by 11pm", "Floss"],
            HabitCategory::Fitness => &["Morning stretch", "10k steps", "Gym session"],
            HabitCategory::Mindfulness => &["Meditate 10 min", "Gratitude note"],
            HabitCategory::Productivity => &["Plan tomorrow", "Inbox zero"],
            HabitCategory::Learning => &["Read 20 pages", "Practice vocabulary"],
            HabitCategory::Social => &["Call a friend", "Family dinner"],
        }
    }
}

/// How often the habit is meant to be performed
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HabitFrequency {
    Daily,
    Weekly { times_per_week: u8 },
    EveryNDays { n: u16 },
}

impl HabitFrequency {
    pub fn describe(&self) -> String {
        match self {
            HabitFrequency::Daily => "Every day".into(),
            HabitFrequency::Weekly { times_per_week } => {
                format!("{} times per week", times_per_week)
            }
            HabitFrequency::EveryNDays { n } => format!("Every {} days", n),
        }
    }
}

/// Maturity stage of a habit, ordered from newest to fully formed
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum HabitMaturity {
    Seedling,
    Sprouting,
    Developing,
    Established,
}

crate::compat::legacy_enum_deserialize!(HabitMaturity,
    Seedling => "seedling",
    Sprouting => "sprouting",
    Developing => "developing",
    Established => "established",
);

impl HabitMaturity {
    pub fn display_name(&self) -> &'static str {
        match self {
            HabitMaturity::Seedling => "Seedling",
            HabitMaturity::Sprouting => "Sprouting",
            HabitMaturity::Developing => "Developing",
            HabitMaturity::Established => "Established",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            HabitMaturity::Seedling => "🌱",
            HabitMaturity::Sprouting => "🌿",
            HabitMaturity::Developing => "🪴",
            HabitMaturity::Established => "🌳",
        }
    }

    /// The next stage up, or None at the top
    pub fn next(&self) -> Option<HabitMaturity> {
        match self {
            HabitMaturity::Seedling => Some(HabitMaturity::Sprouting),
            HabitMaturity::Sprouting => Some(HabitMaturity::Developing),
            HabitMaturity::Developing => Some(HabitMaturity::Established),
            HabitMaturity::Established => None,
        }
    }
}

/// A tracked habit
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Habit {
    pub id: Uuid,
    pub name: String,
    pub category: HabitCategory,
    pub frequency: HabitFrequency,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub completion_dates: Vec<NaiveDate>,
    #[serde(default = "default_days_to_formation")]
    pub days_to_formation: u32,
    #[serde(default = "default_maturity")]
    pub maturity: HabitMaturity,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub notes: Option<String>,
}

fn default_days_to_formation() -> u32 {
    66
}

fn default_maturity() -> HabitMaturity {
    HabitMaturity::Seedling
}

impl Habit {
    pub fn new(name: impl Into<String>, category: HabitCategory, frequency: HabitFrequency) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            category,
            frequency,
            created_at: Utc::now(),
            completion_dates: Vec::new(),
            days_to_formation: default_days_to_formation(),
            maturity: HabitMaturity::Seedling,
            archived: false,
            notes: None,
        }
    }

    /// Record a completion for the given day (idempotent per day)
    pub fn mark_completed(&mut self, date: NaiveDate) {
        if !self.completion_dates.contains(&date) {
            self.completion_dates.push(date);
            tracing::debug!("Habit {} completed on {}", self.name, date);
        }
    }

    /// Consecutive-day streak as of `today`
    ///
    /// Until the habit graduates to Established, the reported streak is
    /// clamped to `days_to_formation` so the display never outruns the
    /// formation target.
    pub fn current_streak(&self, today: NaiveDate) -> u32 {
        let raw = streak::current_streak(&self.completion_dates, today);
        if self.maturity < HabitMaturity::Established {
            raw.min(self.days_to_formation)
        } else {
            raw
        }
    }

    pub fn longest_streak(&self) -> u32 {
        streak::longest_streak(&self.completion_dates)
    }

    /// Fraction of days completed since creation
    pub fn success_rate(&self, today: NaiveDate) -> f64 {
        streak::completion_rate(&self.completion_dates, self.created_at.date_naive(), today)
    }

    /// Stage the current streak has earned, by thirds of the formation window
    pub fn suggested_maturity(&self, today: NaiveDate) -> HabitMaturity {
        let streak = streak::current_streak(&self.completion_dates, today);
        let third = (self.days_to_formation / 3).max(1);
        if streak >= self.days_to_formation {
            HabitMaturity::Established
        } else if streak >= third * 2 {
            HabitMaturity::Developing
        } else if streak >= third {
            HabitMaturity::Sprouting
        } else {
            HabitMaturity::Seedling
        }
    }

    /// Advance maturity one stage; no-op once Established
    pub fn graduate(&mut self) {
        if let Some(next) = self.maturity.next() {
            tracing::info!(
                "Habit {} graduated: {} -> {}",
                self.name,
                self.maturity.display_name(),
                next.display_name()
            );
            self.maturity = next;
        }
    }

    pub fn archive(&mut self) {
        self.archived = true;
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_frequency(mut self, frequency: HabitFrequency) -> Self {
        self.frequency = frequency;
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}
