//! Streak computation from completion-date lists.
//!
//! Input date lists come straight from stored records and may be unsorted
//! and contain duplicates; every function here tolerates both.

use chrono::{Duration, NaiveDate};
use std::collections::BTreeSet;

/// Length of the consecutive-day run ending today or yesterday
///
/// A streak is still "current" if the last completion was yesterday, since
/// the user may simply not have checked in yet today.
pub fn current_streak(dates: &[NaiveDate], today: NaiveDate) -> u32 {
    let days: BTreeSet<NaiveDate> = dates.iter().copied().collect();

    let mut cursor = if days.contains(&today) {
        today
    } else if days.contains(&(today - Duration::days(1))) {
        today - Duration::days(1)
    } else {
        return 0;
    };

    let mut streak = 1;
    while days.contains(&(cursor - Duration::days(1))) {
        cursor = cursor - Duration::days(1);
        streak += 1;
    }
    streak
}

/// Longest consecutive-day run anywhere in the history
pub fn longest_streak(dates: &[NaiveDate]) -> u32 {
    let days: BTreeSet<NaiveDate> = dates.iter().copied().collect();

    let mut longest = 0u32;
    let mut run = 0u32;
    let mut prev: Option<NaiveDate> = None;

    for day in days {
        run = match prev {
            Some(p) if day - p == Duration::days(1) => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        prev = Some(day);
    }
    longest
}

/// Fraction of days in `[since, today]` with at least one completion
///
/// Returns 0.0 for an empty or inverted window.
pub fn completion_rate(dates: &[NaiveDate], since: NaiveDate, today: NaiveDate) -> f64 {
    if today < since {
        return 0.0;
    }
    let window_days = (today - since).num_days() + 1;

    let completed: BTreeSet<NaiveDate> = dates
        .iter()
        .copied()
        .filter(|d| *d >= since && *d <= today)
        .collect();

    completed.len() as f64 / window_days as f64
}
