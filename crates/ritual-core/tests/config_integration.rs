//! Integration tests for configuration and catalog files.

use std::sync::Arc;
use std::thread;

use chrono::NaiveDate;
use indoc::indoc;
use ritual_core::{
    junk_penalty, Catalog, Config, CoreError, DailyInputs, HarmLevel, HarmLevelRule,
    JunkLogEntry, StepScoring,
};
use tempfile::TempDir;

const MENU: &str = indoc! {r#"
    [[items]]
    id = "vada_pav"
    name = "Vada Pav"
    category = "Street Food"
    harm_level = 2
    allowed_frequency = "Once per week"
    harmful_components = ["Deep frying"]

    [[items]]
    id = "jalebi"
    name = "Jalebi"
    category = "Sweets"
    harm_level = 3

    [[rules]]
    harm_level = 2
    free_allowance = 0
    penalty_per_unit = 15

    [[rules]]
    harm_level = 3
    penalty_per_unit = 99
"#};

#[test]
fn load_writes_defaults_when_missing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");

    let cfg = Config::load_from(&path).unwrap();
    assert_eq!(cfg, Config::default());
    assert!(path.exists());

    let reloaded = Config::load_from(&path).unwrap();
    assert_eq!(reloaded, cfg);
}

#[test]
fn partial_file_fills_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        indoc! {r#"
            [steps]
            mode = "linear"

            [workout]
            points_per_exercise = 15
        "#},
    )
    .unwrap();

    let cfg = Config::load_from(&path).unwrap();
    assert!(matches!(cfg.steps, StepScoring::Linear(_)));
    assert_eq!(cfg.workout.points_per_exercise, 15);
    assert_eq!(cfg.completion.min_steps, 10_000);

    let inputs = DailyInputs::new(NaiveDate::from_ymd_opt(2026, 5, 5).unwrap())
        .with_steps(3_000)
        .with_completed_exercises(2);
    let breakdown = cfg.scorer().score(&inputs, &cfg.catalog().unwrap());
    assert_eq!(breakdown.step_points, 30);
    assert_eq!(breakdown.workout_points, 30);
}

#[test]
fn malformed_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[steps\nthreshold = ").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, CoreError::Config(_)));
}

#[test]
fn saved_changes_survive_reload() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");

    let mut cfg = Config::load_from(&path).unwrap();
    cfg.apply("completion.min_exercises", "3").unwrap();
    cfg.save_to(&path).unwrap();

    let reloaded = Config::load_from(&path).unwrap();
    assert_eq!(reloaded.completion.min_exercises, 3);
}

#[test]
fn catalog_file_with_rules() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("menu.toml");
    std::fs::write(&path, MENU).unwrap();

    let catalog = Catalog::from_path(&path).unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(
        catalog.get("vada_pav").unwrap().allowed_frequency.as_deref(),
        Some("Once per week")
    );
    assert_eq!(
        catalog.rules().get(HarmLevel::HIGH),
        Some(&HarmLevelRule {
            free_allowance: None,
            penalty_per_unit: 99
        })
    );

    let day = NaiveDate::from_ymd_opt(2026, 5, 6).unwrap();
    let evening = day.and_hms_opt(18, 0, 0).unwrap();
    let entries = vec![
        JunkLogEntry::new("vada_pav", 2, evening),
        JunkLogEntry::new("jalebi", 3, evening),
    ];
    assert_eq!(junk_penalty(&entries, day, &catalog, catalog.rules()), 30);
}

#[test]
fn config_catalog_path_overrides_builtin_items_but_keeps_config_rules() {
    let dir = TempDir::new().unwrap();
    let menu = dir.path().join("menu.toml");
    std::fs::write(&menu, MENU).unwrap();

    let mut cfg = Config::default();
    cfg.apply("catalog_path", menu.to_str().unwrap()).unwrap();

    let catalog = cfg.catalog().unwrap();
    assert!(catalog.get("kulfi").is_none());
    assert!(catalog.get("jalebi").is_some());
    assert_eq!(
        catalog.rules().get(HarmLevel::HIGH),
        Some(&HarmLevelRule::limited(1, 30))
    );
}

#[test]
fn missing_catalog_file_is_reported() {
    let mut cfg = Config::default();
    cfg.catalog_path = Some("/definitely/not/here/menu.toml".into());
    let err = cfg.catalog().unwrap_err();
    assert!(matches!(err, CoreError::Catalog(_)));
}

#[test]
fn shared_catalog_scores_concurrently() {
    let catalog = Arc::new(Catalog::builtin());
    let day = NaiveDate::from_ymd_opt(2026, 5, 7).unwrap();

    let handles: Vec<_> = (0..8u32)
        .map(|quantity| {
            let catalog = Arc::clone(&catalog);
            thread::spawn(move || {
                let entries = vec![JunkLogEntry::new(
                    "regular_coke",
                    quantity,
                    day.and_hms_opt(10, 0, 0).unwrap(),
                )];
                junk_penalty(&entries, day, &catalog, catalog.rules())
            })
        })
        .collect();

    let penalties: Vec<u32> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let expected: Vec<u32> = (0..8u32).map(|q| q.saturating_sub(1) * 30).collect();
    assert_eq!(penalties, expected);
}
