//! One-off todo items with priority and due dates.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Priority of a todo, ordered Low < Medium < High
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum TodoPriority {
    Low,
    Medium,
    High,
}

crate::compat::legacy_enum_deserialize!(TodoPriority,
    Low => "low",
    Medium => "medium",
    High => "high",
);

impl TodoPriority {
    pub fn display_name(&self) -> &'static str {
        match self {
            TodoPriority::Low => "Low",
            TodoPriority::Medium => "Medium",
            TodoPriority::High => "High",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            TodoPriority::Low => "🟢",
            TodoPriority::Medium => "🟡",
            TodoPriority::High => "🔴",
        }
    }
}

/// A single todo item
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Todo {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default = "default_priority")]
    pub priority: TodoPriority,
    pub created_at: DateTime<Utc>,
}

fn default_priority() -> TodoPriority {
    TodoPriority::Medium
}

impl Todo {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            due_date: None,
            completed_at: None,
            priority: TodoPriority::Medium,
            created_at: Utc::now(),
        }
    }

    pub fn with_due_date(mut self, due: NaiveDate) -> Self {
        self.due_date = Some(due);
        self
    }

    pub fn with_priority(mut self, priority: TodoPriority) -> Self {
        self.priority = priority;
        self
    }

    pub fn is_completed(&self) -> bool {
        self.completed_at.is_some()
    }

    /// Mark completed; keeps the first completion time on repeat calls
    pub fn complete(&mut self, now: DateTime<Utc>) {
        if self.completed_at.is_none() {
            self.completed_at = Some(now);
        }
    }

    /// Past the due date and not completed
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        match self.due_date {
            Some(due) => today > due && !self.is_completed(),
            None => false,
        }
    }
}
