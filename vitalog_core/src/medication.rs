//! Medications, dose logs, and descriptive dosage constraints.
//!
//! Constraints carry the rule parameters and render human-readable text;
//! enforcement (deciding whether a dose is allowed right now) lives in the
//! app layer above this crate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A medication the user takes
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Medication {
    pub id: Uuid,
    pub name: String,
    pub dose_amount: f64,
    /// Free-form dose unit as printed on the label ("mg", "IU", "tablet")
    pub dose_unit: String,
    #[serde(default)]
    pub instructions: Option<String>,
    #[serde(default)]
    pub constraints: Vec<DosageConstraint>,
    pub created_at: DateTime<Utc>,
}

impl Medication {
    pub fn new(name: impl Into<String>, dose_amount: f64, dose_unit: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            dose_amount,
            dose_unit: dose_unit.into(),
            instructions: None,
            constraints: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = Some(instructions.into());
        self
    }

    pub fn with_constraint(mut self, constraint: DosageConstraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    /// Label-style dose text, e.g. "400 mg"
    pub fn dose_text(&self) -> String {
        format!("{} {}", self.dose_amount, self.dose_unit)
    }
}

/// Outcome of a scheduled dose
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MedicationStatus {
    Taken,
    Skipped,
    Missed,
}

crate::compat::legacy_enum_deserialize!(MedicationStatus,
    Taken => "taken",
    Skipped => "skipped",
    Missed => "missed",
);

impl MedicationStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            MedicationStatus::Taken => "Taken",
            MedicationStatus::Skipped => "Skipped",
            MedicationStatus::Missed => "Missed",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            MedicationStatus::Taken => "💊",
            MedicationStatus::Skipped => "⏭️",
            MedicationStatus::Missed => "⚠️",
        }
    }
}

/// One append-only dose log record
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MedicationLog {
    pub id: Uuid,
    pub medication_id: Uuid,
    pub status: MedicationStatus,
    pub logged_at: DateTime<Utc>,
    #[serde(default)]
    pub note: Option<String>,
}

impl MedicationLog {
    pub fn new(medication_id: Uuid, status: MedicationStatus, logged_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            medication_id,
            status,
            logged_at,
            note: None,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// Safety rule attached to a medication, descriptive only
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DosageConstraint {
    /// At least this many hours between doses
    MinIntervalHours { hours: f64 },
    /// At most this many doses within a rolling period
    MaxPerPeriod { count: u32, period_hours: f64 },
    /// At most this cumulative amount (in the medication's dose unit)
    /// within a rolling period
    MaxCumulative { total: f64, period_hours: f64 },
}

impl DosageConstraint {
    pub fn describe(&self) -> String {
        match self {
            DosageConstraint::MinIntervalHours { hours } => {
                format!("At least {} hours between doses", hours)
            }
            DosageConstraint::MaxPerPeriod {
                count,
                period_hours,
            } => format!("No more than {} doses per {} hours", count, period_hours),
            DosageConstraint::MaxCumulative {
                total,
                period_hours,
            } => format!("No more than {} total per {} hours", total, period_hours),
        }
    }
}
