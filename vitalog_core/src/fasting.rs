//! Fasting windows with a caller-supplied clock.
//!
//! An active fast has no end time; its duration is computed against a `now`
//! the caller passes in, so callers control the clock and tests stay
//! deterministic.

use crate::{Error, Result};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One fasting window, active until `ended_at` is set
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FastingEntry {
    pub id: Uuid,
    pub started_at: DateTime<Utc>,
    #[serde(default)]
    pub ended_at: Option<DateTime<Utc>>,
    pub target_hours: f64,
}

impl FastingEntry {
    pub fn start(started_at: DateTime<Utc>, target_hours: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            started_at,
            ended_at: None,
            target_hours,
        }
    }

    pub fn is_active(&self) -> bool {
        self.ended_at.is_none()
    }

    /// Elapsed time: up to `ended_at` once completed, otherwise up to `now`
    pub fn duration_at(&self, now: DateTime<Utc>) -> Duration {
        let end = self.ended_at.unwrap_or(now);
        (end - self.started_at).max(Duration::zero())
    }

    /// Elapsed hours as a fraction
    pub fn hours_at(&self, now: DateTime<Utc>) -> f64 {
        self.duration_at(now).num_seconds() as f64 / 3600.0
    }

    /// Fraction of the target reached, capped at 1.0
    pub fn progress_at(&self, now: DateTime<Utc>) -> f64 {
        if self.target_hours <= 0.0 {
            return 1.0;
        }
        (self.hours_at(now) / self.target_hours).min(1.0)
    }

    /// End the fast; erroring on a second completion keeps the log honest
    pub fn complete(&mut self, now: DateTime<Utc>) -> Result<()> {
        if self.ended_at.is_some() {
            return Err(Error::Validation(format!(
                "fast {} is already completed",
                self.id
            )));
        }
        if now < self.started_at {
            return Err(Error::Validation(
                "fast cannot end before it started".into(),
            ));
        }
        self.ended_at = Some(now);
        tracing::info!(
            "Fast {} completed after {:.1}h (target {:.1}h)",
            self.id,
            self.hours_at(now),
            self.target_hours
        );
        Ok(())
    }

    /// Whether the elapsed time reached the target
    pub fn target_met(&self, now: DateTime<Utc>) -> bool {
        self.hours_at(now) >= self.target_hours
    }
}
