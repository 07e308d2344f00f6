//! Day-over-day streak engine.
//!
//! Consumes an ordered list of explicit [`DayRecord`]s and reports the current
//! run, the longest run and totals. Missing dates are never inferred here;
//! callers with a sparse history run it through [`fill_missing_days`] first.

mod completion;

pub use completion::CompletionCriteria;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::scoring::ScoreBreakdown;

/// One historical day as seen by the streak engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    pub date: NaiveDate,
    pub completed: bool,
    #[serde(default)]
    pub points: u32,
}

impl DayRecord {
    pub fn new(date: NaiveDate, completed: bool, points: u32) -> Self {
        Self {
            date,
            completed,
            points,
        }
    }

    /// An incomplete, zero-point day.
    pub fn missed(date: NaiveDate) -> Self {
        Self::new(date, false, 0)
    }

    /// Record a scored day, taking its net score as the day's points.
    pub fn from_breakdown(date: NaiveDate, breakdown: &ScoreBreakdown, completed: bool) -> Self {
        Self::new(date, completed, breakdown.net_score)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakSummary {
    /// Consecutive completed days ending at the most recent record.
    pub current_streak: u32,
    pub longest_streak: u32,
    pub total_active_days: u32,
    pub total_points: u64,
}

impl StreakSummary {
    /// Days the current streak still needs to reach `milestone`.
    pub fn days_to_milestone(&self, milestone: u32) -> u32 {
        milestone.saturating_sub(self.current_streak)
    }
}

/// Summarise a chronologically ordered history (oldest first).
pub fn compute_streak_summary(history: &[DayRecord]) -> StreakSummary {
    let mut summary = StreakSummary::default();
    let mut temp_streak = 0u32;

    for day in history {
        summary.total_points = summary.total_points.saturating_add(u64::from(day.points));
        if day.completed {
            temp_streak += 1;
            summary.total_active_days += 1;
            summary.longest_streak = summary.longest_streak.max(temp_streak);
        } else {
            temp_streak = 0;
        }
    }

    let trailing = history.iter().rev().take_while(|day| day.completed).count();
    summary.current_streak = u32::try_from(trailing).unwrap_or(u32::MAX);

    summary
}

/// Running streak counters, advanced one recorded day at a time.
///
/// This is the persisted form kept next to a user's activity log. Unlike
/// [`compute_streak_summary`] it never sees the whole history, only the
/// previous state and the newest day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakState {
    pub current_streak: u32,
    pub longest_streak: u32,
    #[serde(default)]
    pub last_active_date: Option<NaiveDate>,
}

impl StreakState {
    /// Fold one day into the counters.
    ///
    /// An incomplete day resets the current run. A completed day extends the
    /// run when it directly follows `last_active_date` and starts a new run of
    /// one after a gap. Days on or before `last_active_date` leave the state
    /// untouched.
    pub fn record(&mut self, date: NaiveDate, completed: bool) {
        if self.last_active_date.is_some_and(|last| date <= last) {
            tracing::debug!(%date, "ignoring day at or before last active date");
            return;
        }

        if !completed {
            self.current_streak = 0;
            return;
        }

        let follows_last = self
            .last_active_date
            .and_then(|last| last.succ_opt())
            .is_some_and(|next| next == date);
        self.current_streak = if follows_last && self.current_streak > 0 {
            self.current_streak.saturating_add(1)
        } else {
            1
        };
        self.longest_streak = self.longest_streak.max(self.current_streak);
        self.last_active_date = Some(date);
    }

    /// Builder-style [`record`](Self::record) for a [`DayRecord`].
    pub fn with_day(mut self, day: &DayRecord) -> Self {
        self.record(day.date, day.completed);
        self
    }
}

/// Densify a sparse history.
///
/// Records are ordered by date; when a date appears more than once the last
/// record wins (the revised "today"). Every date missing between the first
/// record and `through` (or the last record when `through` is `None`) becomes
/// an incomplete, zero-point day.
pub fn fill_missing_days(
    records: impl IntoIterator<Item = DayRecord>,
    through: Option<NaiveDate>,
) -> Vec<DayRecord> {
    let by_date: BTreeMap<NaiveDate, DayRecord> =
        records.into_iter().map(|r| (r.date, r)).collect();

    let Some((&first, _)) = by_date.first_key_value() else {
        return Vec::new();
    };
    let last = by_date
        .last_key_value()
        .map(|(&date, _)| date)
        .unwrap_or(first);
    let end = through.map_or(last, |t| t.max(last));

    first
        .iter_days()
        .take_while(|date| *date <= end)
        .map(|date| {
            by_date
                .get(&date)
                .copied()
                .unwrap_or_else(|| DayRecord::missed(date))
        })
        .collect()
}
