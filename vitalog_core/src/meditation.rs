//! Meditation session records.

use crate::mood::MoodLevel;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Style of meditation practice
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MeditationKind {
    Breathing,
    Guided,
    BodyScan,
    Walking,
    Unguided,
}

crate::compat::legacy_enum_deserialize!(MeditationKind,
    Breathing => "breathing",
    Guided => "guided",
    BodyScan => "body_scan",
    Walking => "walking",
    Unguided => "unguided",
);

impl MeditationKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            MeditationKind::Breathing => "Breathing",
            MeditationKind::Guided => "Guided",
            MeditationKind::BodyScan => "Body scan",
            MeditationKind::Walking => "Walking",
            MeditationKind::Unguided => "Unguided",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            MeditationKind::Breathing => "🌬️",
            MeditationKind::Guided => "🎧",
            MeditationKind::BodyScan => "🧘",
            MeditationKind::Walking => "🚶",
            MeditationKind::Unguided => "🕯️",
        }
    }
}

/// One logged meditation session with optional before/after mood
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MeditationEntry {
    pub id: Uuid,
    pub kind: MeditationKind,
    pub performed_at: DateTime<Utc>,
    pub duration_minutes: u32,
    #[serde(default)]
    pub mood_before: Option<MoodLevel>,
    #[serde(default)]
    pub mood_after: Option<MoodLevel>,
}

impl MeditationEntry {
    pub fn new(kind: MeditationKind, duration_minutes: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            performed_at: Utc::now(),
            duration_minutes,
            mood_before: None,
            mood_after: None,
        }
    }

    pub fn with_moods(mut self, before: MoodLevel, after: MoodLevel) -> Self {
        self.mood_before = Some(before);
        self.mood_after = Some(after);
        self
    }

    /// Score delta; None unless both moods were recorded
    pub fn mood_change(&self) -> Option<i8> {
        match (self.mood_before, self.mood_after) {
            (Some(before), Some(after)) => Some(after.score() - before.score()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mood_change_requires_both() {
        let mut entry = MeditationEntry::new(MeditationKind::Breathing, 10);
        assert_eq!(entry.mood_change(), None);

        entry.mood_before = Some(MoodLevel::Low);
        assert_eq!(entry.mood_change(), None);

        entry.mood_after = Some(MoodLevel::High);
        assert_eq!(entry.mood_change(), Some(2));
    }

    #[test]
    fn test_with_moods() {
        let entry = MeditationEntry::new(MeditationKind::BodyScan, 20)
            .with_moods(MoodLevel::Neutral, MoodLevel::VeryHigh);
        assert_eq!(entry.mood_change(), Some(2));
    }

    #[test]
    fn test_kind_legacy_parsing() {
        let kind: MeditationKind = serde_json::from_str("\"MeditationKind.body_scan\"").unwrap();
        assert_eq!(kind, MeditationKind::BodyScan);
    }
}
