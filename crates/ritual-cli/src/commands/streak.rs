//! Streak summary command.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Args;
use serde::Serialize;

use ritual_core::{compute_streak_summary, fill_missing_days, DayRecord, StreakSummary};

use super::{parse_date, read_input};

const WEEK: u32 = 7;

#[derive(Args)]
pub struct StreakArgs {
    /// JSON file with day records ("-" for stdin)
    #[arg(long)]
    history: PathBuf,
    /// Treat days absent from the history as missed
    #[arg(long)]
    fill_gaps: bool,
    /// Extend the filled history up to this day (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date, requires = "fill_gaps")]
    through: Option<NaiveDate>,
}

#[derive(Serialize)]
struct StreakReport {
    #[serde(flatten)]
    summary: StreakSummary,
    days_to_week_streak: u32,
}

pub fn run(args: StreakArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut history: Vec<DayRecord> = serde_json::from_str(&read_input(&args.history)?)?;
    if args.fill_gaps {
        history = fill_missing_days(history, args.through);
    }
    tracing::debug!(days = history.len(), "computing streak summary");

    let summary = compute_streak_summary(&history);
    let report = StreakReport {
        summary,
        days_to_week_streak: summary.days_to_milestone(WEEK),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
