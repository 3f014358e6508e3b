//! Integration tests for the vitalog binary.
//!
//! These tests verify end-to-end behavior including:
//! - Habit creation, completion, and graduation
//! - Weight logging and CSV export
//! - Fasting start/status/end workflow
//! - Food, mood, goal, and medication logging

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to create a test data directory
fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Helper to get the path to the CLI binary
fn cli() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("vitalog"))
}

#[test]
fn test_cli_help() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Personal wellness tracker"));
}

#[test]
fn test_habit_add_and_list() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().to_path_buf();

    cli()
        .args(["habit", "add", "Meditate", "--category", "mindfulness"])
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Added habit 'Meditate'"));

    cli()
        .args(["habit", "list"])
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Meditate"));

    assert!(data_dir.join("state.json").exists());
}

#[test]
fn test_habit_duplicate_rejected() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().to_path_buf();

    cli()
        .args(["habit", "add", "Floss"])
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success();

    cli()
        .args(["habit", "add", "Floss"])
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .failure();
}

#[test]
fn test_habit_done_reports_streak() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().to_path_buf();

    cli()
        .args(["habit", "add", "Stretch"])
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success();

    cli()
        .args(["habit", "done", "Stretch"])
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("streak: 1"));
}

#[test]
fn test_habit_graduate() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().to_path_buf();

    cli()
        .args(["habit", "add", "Read"])
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success();

    cli()
        .args(["habit", "graduate", "Read"])
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Sprouting"));
}

#[test]
fn test_weight_log_and_export() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().to_path_buf();

    for value in ["80.0", "79.5", "79.1"] {
        cli()
            .args(["weight", "log", value, "--unit", "kg"])
            .arg("--data-dir")
            .arg(&data_dir)
            .assert()
            .success();
    }

    cli()
        .args(["weight", "export"])
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 3 entries"));

    let csv_path = data_dir.join("weight.csv");
    assert!(csv_path.exists());
    let csv_content = fs::read_to_string(&csv_path).expect("Failed to read CSV");
    assert!(csv_content.contains("id,recorded_at"));
}

#[test]
fn test_weight_export_with_cleanup() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().to_path_buf();

    cli()
        .args(["weight", "log", "80.0", "--unit", "kg"])
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success();

    cli()
        .args(["weight", "export", "--cleanup"])
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleaned up 1 processed"));

    let journal_dir = data_dir.join("journal");
    let leftovers: Vec<_> = fs::read_dir(&journal_dir)
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().ends_with(".processed"))
        .collect();
    assert_eq!(leftovers.len(), 0);
}

#[test]
fn test_weight_export_nothing_to_do() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().to_path_buf();

    cli()
        .args(["weight", "export"])
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing to export"));
}

#[test]
fn test_weight_unknown_unit_fails() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().to_path_buf();

    cli()
        .args(["weight", "log", "80.0", "--unit", "grams"])
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .failure();
}

#[test]
fn test_fasting_workflow() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().to_path_buf();

    cli()
        .args(["fast", "start", "--target-hours", "16"])
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Fast started"));

    cli()
        .args(["fast", "status"])
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("of 16.0h"));

    // Starting a second fast while one is active fails
    cli()
        .args(["fast", "start"])
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .failure();

    cli()
        .args(["fast", "end"])
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Fast ended"));

    // Completed fast lands in the journal, active file is gone
    assert!(data_dir.join("journal/fasts.jsonl").exists());
    assert!(!data_dir.join("active_fast.json").exists());

    cli()
        .args(["fast", "end"])
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .failure();
}

#[test]
fn test_food_template_logging() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().to_path_buf();

    cli()
        .args(["food", "templates"])
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Banana"));

    cli()
        .args(["food", "template", "Banana", "--servings", "2", "--meal", "snack"])
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("210 kcal"));

    cli()
        .args(["food", "today"])
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("210 kcal"));
}

#[test]
fn test_food_unknown_template_fails() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().to_path_buf();

    cli()
        .args(["food", "template", "Pizza"])
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .failure();
}

#[test]
fn test_mood_logging_reports_change() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().to_path_buf();

    cli()
        .args(["mood", "2", "--after", "4", "--text", "long walk helped"])
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Mood improved by 2"));

    assert!(data_dir.join("journal/mood.jsonl").exists());
}

#[test]
fn test_goal_milestone_workflow() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().to_path_buf();

    cli()
        .args([
            "goal",
            "add",
            "Run a 10k",
            "--milestone",
            "Sign up",
            "--milestone",
            "First 5k",
        ])
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success();

    cli()
        .args(["goal", "done-milestone", "Run a 10k", "Sign up"])
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success();

    cli()
        .args(["goal", "list"])
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("50%"));
}

#[test]
fn test_medication_workflow() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().to_path_buf();

    cli()
        .args(["med", "add", "Vitamin D", "--dose", "1000", "--unit", "IU"])
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success();

    cli()
        .args(["med", "log", "Vitamin D", "--status", "taken"])
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success();

    assert!(data_dir.join("journal/meds.jsonl").exists());

    // Unknown medication fails
    cli()
        .args(["med", "log", "Unobtanium"])
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .failure();
}

#[test]
fn test_habit_add_weekly_frequency() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().to_path_buf();

    cli()
        .args(["habit", "add", "Gym", "--times-per-week", "3"])
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success();

    cli()
        .args(["habit", "list"])
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("3 times per week"));

    // Weekly and every-n-days are mutually exclusive
    cli()
        .args([
            "habit",
            "add",
            "Sauna",
            "--times-per-week",
            "2",
            "--every-n-days",
            "3",
        ])
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .failure();
}

#[test]
fn test_habit_add_every_n_days_frequency() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().to_path_buf();

    cli()
        .args(["habit", "add", "Water plants", "--every-n-days", "2"])
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success();

    cli()
        .args(["habit", "list"])
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Every 2 days"));
}

#[test]
fn test_debug_logging_via_env_filter() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().to_path_buf();

    cli()
        .args(["habit", "list"])
        .arg("--data-dir")
        .arg(&data_dir)
        .env("RUST_LOG", "debug")
        .assert()
        .success()
        .stdout(predicate::str::contains("Using data directory"));
}

#[test]
fn test_config_init_writes_defaults() {
    let temp_dir = setup_test_dir();

    cli()
        .args(["config", "init"])
        .env("XDG_CONFIG_HOME", temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default config"));

    let config_path = temp_dir.path().join("vitalog/config.toml");
    let contents = fs::read_to_string(&config_path).expect("Failed to read config");
    assert!(contents.contains("days_to_formation = 66"));

    // A second init never clobbers an existing file
    fs::write(&config_path, "[habits]\ndays_to_formation = 21\n").unwrap();
    cli()
        .args(["config", "init"])
        .env("XDG_CONFIG_HOME", temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));

    cli()
        .args(["config", "show"])
        .env("XDG_CONFIG_HOME", temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("days to formation: 21"));
}

#[test]
fn test_state_persists_across_runs() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().to_path_buf();

    cli()
        .args(["habit", "add", "Journal"])
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success();

    cli()
        .args(["goal", "add", "Write a book"])
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success();

    // Both records survive in the same state file
    cli()
        .args(["habit", "list"])
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Journal"));

    cli()
        .args(["goal", "list"])
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Write a book"));
}
