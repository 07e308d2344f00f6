//! # Ritual Core Library
//!
//! This library provides the scoring rules behind the Ritual daily-habit
//! tracker. Collaborators (the CLI, a web backend, a UI) collect raw daily
//! inputs and hand them to the core; the core answers with point breakdowns
//! and streak figures. It performs no I/O except loading its own
//! configuration and catalog files.
//!
//! ## Architecture
//!
//! - **Catalog**: immutable junk-food items tagged with a harm level (0-3) and
//!   the per-level allowance/penalty rules
//! - **Scoring**: step, workout and junk penalty calculators combined by the
//!   daily aggregator into a never-negative [`ScoreBreakdown`]
//! - **Streak**: current/longest streak and totals over a day-by-day history
//! - **Storage**: TOML-based configuration of the scoring constants
//!
//! ## Key Components
//!
//! - [`Catalog`]: item lookup and harm-level rules
//! - [`DailyScorer`]: configured entry point for a day's score
//! - [`compute_streak_summary`]: streak engine
//! - [`Config`]: application configuration management

pub mod catalog;
pub mod error;
pub mod scoring;
pub mod storage;
pub mod streak;

pub use catalog::{
    Catalog, FlatPenaltyTable, HarmLevel, HarmLevelRule, HarmLevelRules, JunkCatalogItem,
};
pub use error::{CatalogError, ConfigError, CoreError, ValidationError};
pub use scoring::{
    clamp_non_negative, daily_score, junk_penalty, junk_penalty_detail, junk_penalty_with,
    step_points, workout_points, BucketPenalty, DailyInputs, DailyScorer, HarmLevelPolicy,
    JunkLogEntry, LinearSteps, PenaltyPolicy, ScoreBreakdown, StepScoring, TieredSteps,
    WorkoutScoring,
};
pub use storage::Config;
pub use streak::{
    compute_streak_summary, fill_missing_days, CompletionCriteria, DayRecord, StreakState,
    StreakSummary,
};
