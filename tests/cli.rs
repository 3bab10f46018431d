//! End-to-end CLI tests.
//!
//! These only exercise the non-interactive surface; the TUI screens need a
//! real terminal and are covered by the unit tests on the state machines.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn stillgrove() -> Command {
    #[allow(clippy::unwrap_used)]
    Command::cargo_bin("stillgrove").unwrap()
}

#[test]
fn test_help() {
    stillgrove()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Pomodoro"))
        .stdout(predicate::str::contains("breathe"));
}

#[test]
fn test_version() {
    stillgrove()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("stillgrove"));
}

#[test]
fn test_config_path_honors_override() {
    stillgrove()
        .args(["config", "path", "--config", "/tmp/custom.yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("/tmp/custom.yaml"));
}

#[test]
fn test_config_path_defaults_to_home() {
    let home = TempDir::new().unwrap();
    stillgrove()
        .env("HOME", home.path())
        .env_remove("STILLGROVE_CONFIG")
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(".stillgrove"));
}

#[test]
fn test_config_show_json_defaults() {
    let home = TempDir::new().unwrap();
    stillgrove()
        .env("HOME", home.path())
        .env_remove("STILLGROVE_CONFIG")
        .args(["config", "show", "--output", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"focus_minutes\": 25"))
        .stdout(predicate::str::contains("\"sessions_until_long_break\": 4"));
}

#[test]
fn test_config_init_and_show() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.yaml");
    let config_arg = config_path.to_string_lossy().into_owned();

    stillgrove()
        .args(["config", "init", "--config", &config_arg])
        .assert()
        .success();
    assert!(config_path.exists());

    stillgrove()
        .args(["config", "show", "--config", &config_arg])
        .assert()
        .success()
        .stdout(predicate::str::contains("Focus: 25 minutes"))
        .stdout(predicate::str::contains("every 4 sessions"));
}

#[test]
fn test_config_init_refuses_overwrite() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.yaml");
    let config_arg = config_path.to_string_lossy().into_owned();

    stillgrove()
        .args(["config", "init", "--config", &config_arg])
        .assert()
        .success();

    stillgrove()
        .args(["config", "init", "--config", &config_arg])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    stillgrove()
        .args(["config", "init", "--force", "--config", &config_arg])
        .assert()
        .success();
}

#[test]
fn test_config_init_force_replaces_corrupt_file() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.yaml");
    std::fs::write(&config_path, "timer: [not a map").unwrap();

    // a broken config must not stop init from rewriting it
    stillgrove()
        .args(["config", "init", "--force"])
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success();

    stillgrove()
        .args(["config", "show", "--output", "json"])
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"focus_minutes\": 25"));
}

#[test]
fn test_config_path_works_with_corrupt_file() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.yaml");
    std::fs::write(&config_path, "not: [valid").unwrap();

    stillgrove()
        .args(["config", "path"])
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("config.yaml"));
}

#[test]
fn test_breathe_rejects_oversized_duration() {
    let home = TempDir::new().unwrap();
    stillgrove()
        .env("HOME", home.path())
        .env_remove("STILLGROVE_CONFIG")
        .args(["breathe", "--duration", "99999999999999999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid duration"));
}

#[test]
fn test_config_rejects_zero_duration() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.yaml");
    std::fs::write(&config_path, "timer:\n  focus_minutes: 0\n").unwrap();

    stillgrove()
        .args(["config", "show"])
        .arg("--config")
        .arg(&config_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be positive"));
}

#[test]
fn test_breathe_rejects_bad_duration() {
    let home = TempDir::new().unwrap();
    stillgrove()
        .env("HOME", home.path())
        .env_remove("STILLGROVE_CONFIG")
        .args(["breathe", "--duration", "soon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid duration"));
}

#[test]
fn test_completions_bash() {
    stillgrove()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("stillgrove"));
}

#[test]
fn test_config_env_var_override() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("env-config.yaml");
    std::fs::write(&config_path, "timer:\n  focus_minutes: 45\n").unwrap();

    stillgrove()
        .env("STILLGROVE_CONFIG", &config_path)
        .args(["config", "show", "--output", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"focus_minutes\": 45"));
}
