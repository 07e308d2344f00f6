//! Daily scoring: steps, workouts, junk penalties and their aggregation.

mod daily;
mod junk;
mod steps;
mod workout;

pub use daily::{daily_score, DailyInputs, DailyScorer, ScoreBreakdown};
pub use junk::{
    junk_penalty, junk_penalty_detail, junk_penalty_with, BucketPenalty, HarmLevelPolicy,
    JunkLogEntry, PenaltyPolicy,
};
pub use steps::{step_points, LinearSteps, StepScoring, TieredSteps};
pub use workout::{workout_points, WorkoutScoring};

/// Clamp a raw, possibly negative count from a collaborator to the range the
/// calculators accept.
pub fn clamp_non_negative(value: i64) -> u32 {
    u32::try_from(value.max(0)).unwrap_or(u32::MAX)
}
