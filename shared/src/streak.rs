//! Workout streak tracking
//!
//! Completed workout days are a set of local calendar dates persisted as a
//! JSON array of `yyyy-mm-dd` strings. The streak walks backwards from today
//! counting consecutive completed days.
//!
//! # Today is not a break
//!
//! A missing entry for today does not end the streak: the walk skips offset 0
//! and only treats a gap as terminating from yesterday on. With yesterday and
//! the day before completed, the streak is 2 whether or not today is marked.

use crate::errors::StorageError;
use crate::storage::{load_json, save_json, KeyValueStore, WORKOUT_DAYS_KEY};
use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;
use std::collections::BTreeSet;

/// Maximum number of days the streak walk looks back
pub const MAX_STREAK_LOOKBACK_DAYS: i64 = 365;

/// Number of cells in the calendar view (six full weeks)
pub const CALENDAR_DAYS: i64 = 42;

/// Column headers for the calendar grid
pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Format a date the way it is stored
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a stored `yyyy-mm-dd` date
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

/// Count consecutive completed days walking back from `today`
pub fn compute_streak(days: &BTreeSet<NaiveDate>, today: NaiveDate) -> u32 {
    let mut streak = 0;

    for offset in 0..MAX_STREAK_LOOKBACK_DAYS {
        let date = today - Duration::days(offset);
        if days.contains(&date) {
            streak += 1;
        } else if offset > 0 {
            break;
        }
    }

    streak
}

/// One cell of the calendar grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarCell {
    pub date: NaiveDate,
    /// `yyyy-mm-dd`, the value passed back on toggle
    pub iso: String,
    pub day_of_month: u32,
    pub completed: bool,
    pub is_today: bool,
}

/// Build the trailing 42-day calendar ending today, oldest first
pub fn calendar(days: &BTreeSet<NaiveDate>, today: NaiveDate) -> Vec<CalendarCell> {
    (0..CALENDAR_DAYS)
        .rev()
        .map(|offset| {
            let date = today - Duration::days(offset);
            CalendarCell {
                date,
                iso: format_date(date),
                day_of_month: date.day(),
                completed: days.contains(&date),
                is_today: offset == 0,
            }
        })
        .collect()
}

/// Streak count with its display unit ("1 day", "3 days")
pub fn streak_label(streak: u32) -> String {
    if streak == 1 {
        "1 day".to_string()
    } else {
        format!("{} days", streak)
    }
}

/// Workout days backed by a key-value store
///
/// Every toggle writes the whole set back. Two tabs toggling concurrently
/// resolve as last write wins.
pub struct StreakTracker<S> {
    store: S,
    days: BTreeSet<NaiveDate>,
}

impl<S: KeyValueStore> StreakTracker<S> {
    /// Load the persisted set; unreadable entries are dropped
    pub fn load(store: S) -> Self {
        let raw: Vec<String> = load_json(&store, WORKOUT_DAYS_KEY).unwrap_or_default();
        let days = raw.iter().filter_map(|d| parse_date(d)).collect();
        Self { store, days }
    }

    pub fn days(&self) -> &BTreeSet<NaiveDate> {
        &self.days
    }

    pub fn is_workout_day(&self, date: NaiveDate) -> bool {
        self.days.contains(&date)
    }

    /// Flip `date`, persist, and return the recomputed streak
    pub fn toggle_workout_day(
        &mut self,
        date: NaiveDate,
        today: NaiveDate,
    ) -> Result<u32, StorageError> {
        if !self.days.remove(&date) {
            self.days.insert(date);
        }
        self.persist()?;
        Ok(self.streak(today))
    }

    /// Toggle using a stored `yyyy-mm-dd` string
    pub fn toggle_iso(&mut self, date: &str, today: NaiveDate) -> Result<u32, StorageError> {
        let parsed = parse_date(date)
            .ok_or_else(|| StorageError::Serialization(format!("Invalid date: {}", date)))?;
        self.toggle_workout_day(parsed, today)
    }

    pub fn streak(&self, today: NaiveDate) -> u32 {
        compute_streak(&self.days, today)
    }

    pub fn calendar(&self, today: NaiveDate) -> Vec<CalendarCell> {
        calendar(&self.days, today)
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    fn persist(&mut self) -> Result<(), StorageError> {
        let raw: Vec<String> = self.days.iter().map(|d| format_date(*d)).collect();
        save_json(&mut self.store, WORKOUT_DAYS_KEY, &raw)
    }
}
