//! Integration tests for the stride binary.
//!
//! These tests verify end-to-end behavior including:
//! - The demo output for the built-in sample records
//! - Daily and training reports from command-line records
//! - Error handling differences between the two report kinds
//! - Profile overrides from flags and config files

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to create an isolated config directory
fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Helper to get the CLI binary, isolated from the user's real config
fn cli(config_home: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("stride"));
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_cli_help() {
    let temp_dir = setup_test_dir();
    cli(&temp_dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Distance, speed and calorie reports from step counts",
        ));
}

#[test]
fn test_default_command_runs_demo() {
    let temp_dir = setup_test_dir();
    cli(&temp_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Daily activity ==="))
        .stdout(predicate::str::contains("Steps: 678."))
        .stdout(predicate::str::contains("Calories burned: 24.34 kcal."))
        .stdout(predicate::str::contains("Activity: Бег"))
        .stdout(predicate::str::contains("Calories burned: 175.27 kcal."))
        .stdout(predicate::str::contains("Activity: Ходьба"))
        .stdout(predicate::str::contains("Calories burned: 200.07 kcal."));
}

#[test]
fn test_day_report() {
    let temp_dir = setup_test_dir();
    cli(&temp_dir)
        .arg("day")
        .arg("678,0h50m")
        .assert()
        .success()
        .stdout("Steps: 678.\nDistance: 0.44 km.\nCalories burned: 24.34 kcal.\n");
}

#[test]
fn test_day_failure_is_logged_not_printed() {
    let temp_dir = setup_test_dir();
    cli(&temp_dir)
        .arg("day")
        .arg("678")
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("expected 2 fields, got 1"));
}

#[test]
fn test_day_negative_steps_is_suppressed() {
    let temp_dir = setup_test_dir();
    cli(&temp_dir)
        .arg("day")
        .arg("-5,1h")
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("must be positive"));
}

#[test]
fn test_training_report() {
    let temp_dir = setup_test_dir();
    cli(&temp_dir)
        .arg("training")
        .arg("3456,Бег,1h30m")
        .assert()
        .success()
        .stdout(predicate::str::contains("Duration: 1.50 h."))
        .stdout(predicate::str::contains("Distance: 2.50 km."))
        .stdout(predicate::str::contains("Speed: 1.67 km/h"))
        .stdout(predicate::str::contains("Calories burned: 175.27 kcal."));
}

#[test]
fn test_training_unknown_activity_fails() {
    let temp_dir = setup_test_dir();
    cli(&temp_dir)
        .arg("training")
        .arg("3456,Swimming,1h30m")
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("Swimming"));
}

#[test]
fn test_training_bad_duration_fails() {
    let temp_dir = setup_test_dir();
    cli(&temp_dir)
        .arg("training")
        .arg("3456,running,1.5h")
        .assert()
        .failure()
        .stderr(predicate::str::contains("DurationParse"));
}

#[test]
fn test_json_output() {
    let temp_dir = setup_test_dir();
    let output = cli(&temp_dir)
        .arg("training")
        .arg("3456,running,1h30m")
        .arg("--json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value =
        serde_json::from_slice(&output).expect("stdout should be JSON");
    assert_eq!(value["activity"], "running");
    assert_eq!(value["duration_hours"], 1.5);
    let kcal = value["calories_kcal"].as_f64().unwrap();
    assert!((kcal - 175.27104).abs() < 1e-6);
}

#[test]
fn test_profile_flags_override_defaults() {
    let temp_dir = setup_test_dir();
    // Doubling the weight doubles the calories
    cli(&temp_dir)
        .args(["--weight", "140", "training", "3456,running,1h30m"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Calories burned: 350.54 kcal."));
}

#[test]
fn test_invalid_weight_flag_fails_training() {
    let temp_dir = setup_test_dir();
    cli(&temp_dir)
        .args(["--weight", "-70", "training", "3456,running,1h30m"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("weight"));
}

#[test]
fn test_config_file_profile() {
    let temp_dir = setup_test_dir();
    let config_path = temp_dir.path().join("custom.toml");
    fs::write(&config_path, "[profile]\nweight_kg = 140.0\n").unwrap();

    cli(&temp_dir)
        .arg("--config")
        .arg(&config_path)
        .args(["training", "3456,running,1h30m"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Calories burned: 350.54 kcal."));
}

#[cfg(target_os = "linux")]
#[test]
fn test_default_config_location() {
    let temp_dir = setup_test_dir();
    let config_dir = temp_dir.path().join("stride");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.toml"), "[profile]\nweight_kg = 140.0\n").unwrap();

    cli(&temp_dir)
        .args(["training", "3456,running,1h30m"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Calories burned: 350.54 kcal."));
}

#[test]
fn test_malformed_config_fails() {
    let temp_dir = setup_test_dir();
    let config_path = temp_dir.path().join("broken.toml");
    fs::write(&config_path, "[profile\n").unwrap();

    cli(&temp_dir)
        .arg("--config")
        .arg(&config_path)
        .arg("demo")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Toml"));
}
