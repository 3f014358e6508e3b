//! Concurrency tests for vitalog_cli.
//!
//! These tests verify that repeated invocations can safely:
//! - Append to journals (file locking)
//! - Update tracker state (atomic replace)

use assert_cmd::Command;
use std::thread;
use std::time::Duration;
use tempfile::TempDir;

fn cli() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("vitalog"))
}

fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

#[test]
fn test_repeated_journal_appends() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().to_path_buf();

    // Run appends with slight delays (more realistic than thundering herd)
    for i in 0..5 {
        thread::sleep(Duration::from_millis(i * 5));
        cli()
            .args(["weight", "log", "80.0", "--unit", "kg"])
            .arg("--data-dir")
            .arg(&data_dir)
            .assert()
            .success();
    }

    // Verify every entry landed on its own line
    let journal_path = data_dir.join("journal/weight.jsonl");
    let content = std::fs::read_to_string(&journal_path).expect("Failed to read journal");
    let entry_count = content.lines().count();
    assert_eq!(entry_count, 5, "Expected 5 entries, got {}", entry_count);
}

#[test]
fn test_interleaved_state_updates() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().to_path_buf();

    // Interleave habit completions and goal additions against one state file
    cli()
        .args(["habit", "add", "Stretch"])
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success();

    for i in 0..3 {
        thread::sleep(Duration::from_millis(i * 10));
        cli()
            .args(["habit", "done", "Stretch"])
            .arg("--data-dir")
            .arg(&data_dir)
            .assert()
            .success();
        cli()
            .args(["goal", "add", &format!("Goal {}", i)])
            .arg("--data-dir")
            .arg(&data_dir)
            .assert()
            .success();
    }

    // Nothing was lost to a torn write
    let state = std::fs::read_to_string(data_dir.join("state.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&state).unwrap();
    assert_eq!(parsed["goals"].as_object().unwrap().len(), 3);
    assert_eq!(parsed["habits"].as_object().unwrap().len(), 1);
}
