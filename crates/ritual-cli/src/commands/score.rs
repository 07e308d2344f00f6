//! Daily score command.

use std::path::PathBuf;

use chrono::{Local, NaiveDate, NaiveTime};
use clap::Args;
use serde::Serialize;

use ritual_core::{
    clamp_non_negative, junk_penalty_detail, BucketPenalty, Config, DailyInputs, FlatPenaltyTable,
    HarmLevel, JunkLogEntry, ScoreBreakdown,
};

use super::{parse_date, read_input};

#[derive(Args)]
pub struct ScoreArgs {
    /// Steps walked
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    steps: i64,
    /// Exercises completed
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    exercises: i64,
    /// Junk item eaten, optionally with a quantity (repeatable)
    #[arg(long = "junk", value_name = "ID[:QTY]")]
    junk: Vec<String>,
    /// JSON file with junk log entries ("-" for stdin)
    #[arg(long)]
    log: Option<PathBuf>,
    /// Day to score (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = parse_date)]
    date: Option<NaiveDate>,
    /// Include per-level penalty detail and completion
    #[arg(long)]
    detail: bool,
    /// Use the flat per-item penalty table instead of harm levels
    #[arg(long)]
    legacy: bool,
}

#[derive(Serialize)]
struct DetailedScore<B: Serialize> {
    date: NaiveDate,
    completed: bool,
    fully_penalised: bool,
    breakdown: ScoreBreakdown,
    junk: Vec<BucketPenalty<B>>,
}

fn parse_junk(arg: &str, at: chrono::NaiveDateTime) -> Result<JunkLogEntry, String> {
    let (id, quantity) = match arg.split_once(':') {
        Some((id, qty)) => {
            let qty = qty
                .parse::<u32>()
                .map_err(|_| format!("invalid quantity in '{arg}'"))?;
            (id, qty)
        }
        None => (arg, 1),
    };
    if id.is_empty() {
        return Err(format!("missing item id in '{arg}'"));
    }
    Ok(JunkLogEntry::new(id, quantity, at))
}

fn clamp_arg(name: &str, value: i64) -> u32 {
    if value < 0 {
        tracing::warn!(argument = name, value, "negative value clamped to zero");
    }
    clamp_non_negative(value)
}

pub fn run(args: ScoreArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let date = args.date.unwrap_or_else(|| Local::now().date_naive());
    let steps = clamp_arg("steps", args.steps);
    let exercises = clamp_arg("exercises", args.exercises);

    let mut inputs = DailyInputs::new(date)
        .with_steps(steps)
        .with_completed_exercises(exercises);

    if let Some(path) = &args.log {
        let entries: Vec<JunkLogEntry> = serde_json::from_str(&read_input(path)?)?;
        inputs.junk.extend(entries);
    }
    let logged_at = date.and_time(NaiveTime::MIN);
    for arg in &args.junk {
        inputs.junk.push(parse_junk(arg, logged_at)?);
    }

    let scorer = config.scorer();
    let completed = config.completion.is_completed(steps, exercises);

    if args.legacy {
        let table = FlatPenaltyTable::legacy_dashboard();
        let breakdown = scorer.score(&inputs, &table);
        if args.detail {
            let junk: Vec<BucketPenalty<String>> = junk_penalty_detail(&inputs.junk, date, &table);
            print_json(&DetailedScore {
                date,
                completed,
                fully_penalised: breakdown.fully_penalised(),
                breakdown,
                junk,
            })?;
        } else {
            print_json(&breakdown)?;
        }
    } else {
        let catalog = config.catalog()?;
        let breakdown = scorer.score(&inputs, &catalog);
        if args.detail {
            let junk: Vec<BucketPenalty<HarmLevel>> =
                junk_penalty_detail(&inputs.junk, date, &catalog);
            print_json(&DetailedScore {
                date,
                completed,
                fully_penalised: breakdown.fully_penalised(),
                breakdown,
                junk,
            })?;
        } else {
            print_json(&breakdown)?;
        }
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noon() -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 17)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn junk_arg_defaults_to_one() {
        let entry = parse_junk("kulfi", noon()).unwrap();
        assert_eq!(entry.item_id, "kulfi");
        assert_eq!(entry.quantity, 1);
    }

    #[test]
    fn junk_arg_with_quantity() {
        let entry = parse_junk("regular_coke:3", noon()).unwrap();
        assert_eq!(entry.item_id, "regular_coke");
        assert_eq!(entry.quantity, 3);
    }

    #[test]
    fn junk_arg_rejects_bad_quantity() {
        assert!(parse_junk("kulfi:-1", noon()).is_err());
        assert!(parse_junk(":2", noon()).is_err());
    }
}
