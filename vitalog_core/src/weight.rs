//! Weight log entries.
//!
//! When the user weighs in on a stones scale the exact stones+pounds reading
//! is stored next to the converted value, so displaying in the original unit
//! never accumulates conversion error.

use crate::units::{convert_weight, StonesAndPounds, WeightUnit};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One append-only weight measurement
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WeightEntry {
    pub id: Uuid,
    pub recorded_at: DateTime<Utc>,
    pub weight: f64,
    pub unit: WeightUnit,
    /// Exact scale reading when the entry was taken in stone
    #[serde(default)]
    pub exact_stones_pounds: Option<StonesAndPounds>,
    #[serde(default)]
    pub note: Option<String>,
}

impl WeightEntry {
    pub fn new(weight: f64, unit: WeightUnit) -> Self {
        Self {
            id: Uuid::new_v4(),
            recorded_at: Utc::now(),
            weight,
            unit,
            exact_stones_pounds: None,
            note: None,
        }
    }

    /// Construct from an exact stones-and-pounds scale reading
    pub fn from_stones_and_pounds(reading: StonesAndPounds) -> Self {
        Self {
            id: Uuid::new_v4(),
            recorded_at: Utc::now(),
            weight: reading.total_lbs() / crate::units::LBS_PER_STONE,
            unit: WeightUnit::Stone,
            exact_stones_pounds: Some(reading),
            note: None,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// The measurement converted into another unit
    pub fn in_unit(&self, target: WeightUnit) -> f64 {
        convert_weight(self.weight, self.unit, target)
    }

    pub fn in_kg(&self) -> f64 {
        self.in_unit(WeightUnit::Kg)
    }

    /// Stones-and-pounds view, preferring the exact stored reading
    pub fn as_stones_and_pounds(&self) -> StonesAndPounds {
        match self.exact_stones_pounds {
            Some(exact) => exact,
            None => StonesAndPounds::from_total_lbs(self.in_unit(WeightUnit::Lbs)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion_roundtrip() {
        let entry = WeightEntry::new(82.5, WeightUnit::Kg);
        let lbs = entry.in_unit(WeightUnit::Lbs);
        let back = convert_weight(lbs, WeightUnit::Lbs, WeightUnit::Kg);
        assert!((back - 82.5).abs() < 1e-9);
    }

    #[test]
    fn test_exact_reading_preserved() {
        let reading = StonesAndPounds {
            stones: 12,
            pounds: 7.5,
        };
        let entry = WeightEntry::from_stones_and_pounds(reading);

        // The exact reading comes back untouched, not recomputed
        assert_eq!(entry.as_stones_and_pounds(), reading);
        assert_eq!(entry.unit, WeightUnit::Stone);
        assert!((entry.in_unit(WeightUnit::Lbs) - 175.5).abs() < 1e-9);
    }

    #[test]
    fn test_derived_stones_when_no_exact_reading() {
        let entry = WeightEntry::new(175.5, WeightUnit::Lbs);
        let sp = entry.as_stones_and_pounds();
        assert_eq!(sp.stones, 12);
        assert!((sp.pounds - 7.5).abs() < 1e-9);
    }

    #[test]
    fn test_json_roundtrip() {
        let entry = WeightEntry::new(14.2, WeightUnit::Stone).with_note("morning, post-run");
        let json = serde_json::to_string(&entry).unwrap();
        let back: WeightEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, entry.id);
        assert_eq!(back.unit, WeightUnit::Stone);
        assert_eq!(back.note.as_deref(), Some("morning, post-run"));
    }
}
