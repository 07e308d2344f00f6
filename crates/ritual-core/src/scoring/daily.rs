//! Daily score aggregation.
//!
//! The single place where step, workout and junk figures are combined. Hosts
//! hold only the raw inputs and ask the aggregator for the breakdown each time
//! a day is saved.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::junk::{junk_penalty, junk_penalty_with, JunkLogEntry, PenaltyPolicy};
use super::steps::{step_points, StepScoring};
use super::workout::{workout_points, WorkoutScoring};
use crate::catalog::{Catalog, HarmLevelRules};

/// A day's points, before and after penalties.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub step_points: u32,
    pub workout_points: u32,
    pub junk_penalty: u32,
    pub gross_gained: u32,
    /// `max(0, gross_gained - junk_penalty)`
    pub net_score: u32,
}

impl ScoreBreakdown {
    pub fn new(step_points: u32, workout_points: u32, junk_penalty: u32) -> Self {
        let gross_gained = step_points.saturating_add(workout_points);
        Self {
            step_points,
            workout_points,
            junk_penalty,
            gross_gained,
            net_score: gross_gained.saturating_sub(junk_penalty),
        }
    }

    /// Whether penalties wiped out everything gained.
    pub fn fully_penalised(&self) -> bool {
        self.gross_gained > 0 && self.net_score == 0
    }
}

/// Raw inputs collected for one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyInputs {
    pub date: NaiveDate,
    #[serde(default)]
    pub steps: u32,
    #[serde(default)]
    pub completed_exercises: u32,
    #[serde(default)]
    pub junk: Vec<JunkLogEntry>,
}

impl DailyInputs {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            steps: 0,
            completed_exercises: 0,
            junk: Vec::new(),
        }
    }

    pub fn with_steps(mut self, steps: u32) -> Self {
        self.steps = steps;
        self
    }

    pub fn with_completed_exercises(mut self, completed: u32) -> Self {
        self.completed_exercises = completed;
        self
    }

    pub fn with_junk(mut self, entry: JunkLogEntry) -> Self {
        self.junk.push(entry);
        self
    }
}

/// Breakdown for one day using the canonical rules.
pub fn daily_score(
    steps: u32,
    completed_exercises: u32,
    junk_entries: &[JunkLogEntry],
    day: NaiveDate,
    catalog: &Catalog,
    rules: &HarmLevelRules,
) -> ScoreBreakdown {
    ScoreBreakdown::new(
        step_points(steps),
        workout_points(completed_exercises),
        junk_penalty(junk_entries, day, catalog, rules),
    )
}

/// Configured scoring rules for steps and workouts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DailyScorer {
    steps: StepScoring,
    workout: WorkoutScoring,
}

impl DailyScorer {
    pub fn new(steps: StepScoring, workout: WorkoutScoring) -> Self {
        Self { steps, workout }
    }

    pub fn steps(&self) -> &StepScoring {
        &self.steps
    }

    pub fn workout(&self) -> &WorkoutScoring {
        &self.workout
    }

    /// Score a day's inputs, pooling junk through `policy`.
    pub fn score<P: PenaltyPolicy>(&self, inputs: &DailyInputs, policy: &P) -> ScoreBreakdown {
        let breakdown = ScoreBreakdown::new(
            self.steps.points(inputs.steps),
            self.workout.points(inputs.completed_exercises),
            junk_penalty_with(&inputs.junk, inputs.date, policy),
        );
        tracing::debug!(
            date = %inputs.date,
            gross = breakdown.gross_gained,
            penalty = breakdown.junk_penalty,
            net = breakdown.net_score,
            "scored day"
        );
        breakdown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{FlatPenaltyTable, HarmLevel, HarmLevelRule, JunkCatalogItem};
    use crate::scoring::steps::LinearSteps;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 6, 1).unwrap()
    }

    #[test]
    fn net_never_drops_below_zero() {
        let breakdown = ScoreBreakdown::new(30, 0, 90);
        assert_eq!(breakdown.gross_gained, 30);
        assert_eq!(breakdown.net_score, 0);
        assert!(breakdown.fully_penalised());
    }

    #[test]
    fn empty_day_is_not_fully_penalised() {
        assert!(!ScoreBreakdown::new(0, 0, 0).fully_penalised());
    }

    #[test]
    fn daily_score_combines_calculators() {
        let catalog = Catalog::builtin();
        let noon = day().and_hms_opt(12, 0, 0).unwrap();
        let entries = vec![JunkLogEntry::new("packaged_chips", 3, noon)];
        let breakdown = daily_score(8_000, 2, &entries, day(), &catalog, catalog.rules());
        assert_eq!(breakdown.step_points, 40);
        assert_eq!(breakdown.workout_points, 40);
        assert_eq!(breakdown.junk_penalty, 60);
        assert_eq!(breakdown.net_score, 20);
    }

    #[test]
    fn scorer_uses_configured_step_rule() {
        let scorer = DailyScorer::new(
            StepScoring::Linear(LinearSteps::default()),
            WorkoutScoring { points_per_exercise: 25 },
        );
        let inputs = DailyInputs::new(day())
            .with_steps(12_345)
            .with_completed_exercises(2);
        let breakdown = scorer.score(&inputs, &Catalog::builtin());
        assert_eq!(breakdown.step_points, 120);
        assert_eq!(breakdown.workout_points, 50);
        assert_eq!(breakdown.net_score, 170);
    }

    #[test]
    fn scorer_accepts_any_policy() {
        let noon = day().and_hms_opt(12, 0, 0).unwrap();
        let inputs = DailyInputs::new(day())
            .with_steps(10_000)
            .with_junk(JunkLogEntry::new("pizza", 1, noon));

        let flat = DailyScorer::default().score(&inputs, &FlatPenaltyTable::legacy_dashboard());
        assert_eq!(flat.junk_penalty, 25);
        assert_eq!(flat.net_score, 25);

        let catalog = Catalog::new(
            vec![JunkCatalogItem::new("pizza", "Pizza", "Fast Food", HarmLevel::MODERATE)],
            HarmLevelRules::empty().with_rule(HarmLevel::MODERATE, HarmLevelRule::limited(1, 20)),
        )
        .unwrap();
        let bucketed = DailyScorer::default().score(&inputs, &catalog);
        assert_eq!(bucketed.junk_penalty, 0);
        assert_eq!(bucketed.net_score, 50);
    }
}
