//! Goal records with milestones and a status/is_active mirror.
//!
//! `is_active` duplicates `status == Active` because older app versions
//! queried on the boolean. The mirror is recomputed on construction, on
//! every status change, and on deserialization, so records written by any
//! version come back consistent.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle status of a goal
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
    Active,
    Paused,
    Completed,
    Archived,
}

crate::compat::legacy_enum_deserialize!(GoalStatus,
    Active => "active",
    Paused => "paused",
    Completed => "completed",
    Archived => "archived",
);

impl GoalStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            GoalStatus::Active => "Active",
            GoalStatus::Paused => "Paused",
            GoalStatus::Completed => "Completed",
            GoalStatus::Archived => "Archived",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            GoalStatus::Active => "🎯",
            GoalStatus::Paused => "⏸️",
            GoalStatus::Completed => "✅",
            GoalStatus::Archived => "📦",
        }
    }
}

/// A checkpoint on the way to a goal
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Milestone {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}

impl Milestone {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            completed_at: None,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.completed_at.is_some()
    }
}

/// A long-term goal with ordered position in the user's list
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(from = "GoalWire")]
pub struct Goal {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub status: GoalStatus,
    /// Mirror of `status == Active`; read-only outside this module
    pub is_active: bool,
    pub milestones: Vec<Milestone>,
    pub sort_order: i32,
    pub target_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

/// Wire form of a goal; `is_active` in stored data is advisory only
#[derive(Deserialize)]
struct GoalWire {
    id: Uuid,
    title: String,
    #[serde(default)]
    description: Option<String>,
    status: GoalStatus,
    #[serde(default)]
    milestones: Vec<Milestone>,
    #[serde(default)]
    sort_order: i32,
    #[serde(default)]
    target_date: Option<NaiveDate>,
    created_at: DateTime<Utc>,
    #[serde(default)]
    completed_at: Option<DateTime<Utc>>,
}

impl From<GoalWire> for Goal {
    fn from(wire: GoalWire) -> Self {
        Goal {
            id: wire.id,
            title: wire.title,
            description: wire.description,
            status: wire.status,
            is_active: wire.status == GoalStatus::Active,
            milestones: wire.milestones,
            sort_order: wire.sort_order,
            target_date: wire.target_date,
            created_at: wire.created_at,
            completed_at: wire.completed_at,
        }
    }
}

impl Goal {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: None,
            status: GoalStatus::Active,
            is_active: true,
            milestones: Vec::new(),
            sort_order: 0,
            target_date: None,
            created_at: Utc::now(),
            completed_at: None,
        }
    }

    /// Change status, keeping the `is_active` mirror and completion
    /// timestamp in sync
    pub fn with_status(mut self, status: GoalStatus) -> Self {
        self.status = status;
        self.is_active = status == GoalStatus::Active;
        match status {
            GoalStatus::Completed if self.completed_at.is_none() => {
                self.completed_at = Some(Utc::now());
            }
            GoalStatus::Completed => {}
            _ => self.completed_at = None,
        }
        self
    }

    pub fn with_target_date(mut self, date: NaiveDate) -> Self {
        self.target_date = Some(date);
        self
    }

    pub fn with_sort_order(mut self, sort_order: i32) -> Self {
        self.sort_order = sort_order;
        self
    }

    pub fn add_milestone(&mut self, title: impl Into<String>) -> Uuid {
        let milestone = Milestone::new(title);
        let id = milestone.id;
        self.milestones.push(milestone);
        id
    }

    /// Mark a milestone complete; false if the id is unknown
    pub fn complete_milestone(&mut self, milestone_id: Uuid, now: DateTime<Utc>) -> bool {
        match self.milestones.iter_mut().find(|m| m.id == milestone_id) {
            Some(m) => {
                if m.completed_at.is_none() {
                    m.completed_at = Some(now);
                }
                true
            }
            None => false,
        }
    }

    /// Fraction of milestones completed; 0.0 with no milestones
    pub fn progress(&self) -> f64 {
        if self.milestones.is_empty() {
            return 0.0;
        }
        let done = self.milestones.iter().filter(|m| m.is_completed()).count();
        done as f64 / self.milestones.len() as f64
    }

    /// Past the target date without being completed
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        match self.target_date {
            Some(target) => today > target && self.status != GoalStatus::Completed,
            None => false,
        }
    }
}
