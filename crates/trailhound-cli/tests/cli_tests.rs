//! End-to-end CLI behavior that needs no backend: argument surface,
//! configuration bootstrap, and the auth route guard.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn trailhound(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("trailhound").expect("binary builds");
    cmd.arg("--data-dir").arg(data_dir.path());
    cmd.env_remove("TRAILHOUND_PATH");
    cmd
}

#[test]
fn test_help_lists_command_groups() {
    Command::cargo_bin("trailhound")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("auth"))
        .stdout(predicate::str::contains("dog"))
        .stdout(predicate::str::contains("stats"));
}

#[test]
fn test_bare_invocation_shows_bootstrap_guidance() {
    let dir = TempDir::new().unwrap();
    trailhound(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("trailhound init"));
}

#[test]
fn test_data_commands_require_config() {
    let dir = TempDir::new().unwrap();
    trailhound(&dir)
        .args(["dog", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("trailhound init"));
}

#[test]
fn test_init_writes_config_to_data_dir() {
    let dir = TempDir::new().unwrap();
    trailhound(&dir)
        .args([
            "init",
            "--backend-url",
            "https://records.example.net",
            "--api-key",
            "anon-key",
        ])
        .assert()
        .success();

    assert!(dir.path().join("config.toml").exists());
}

#[test]
fn test_route_guard_blocks_unauthenticated_data_commands() {
    let dir = TempDir::new().unwrap();
    trailhound(&dir)
        .args([
            "init",
            "--backend-url",
            "https://records.example.net",
            "--api-key",
            "anon-key",
        ])
        .assert()
        .success();

    // Config exists but nobody is signed in: the guard must fail fast,
    // before any network I/O.
    trailhound(&dir)
        .args(["dog", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("auth login"));

    trailhound(&dir)
        .args(["stats"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("auth login"));
}

#[test]
fn test_auth_status_reports_signed_out() {
    let dir = TempDir::new().unwrap();
    trailhound(&dir)
        .args(["auth", "status"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not signed in"));
}

#[test]
fn test_auth_logout_is_idempotent() {
    let dir = TempDir::new().unwrap();
    trailhound(&dir)
        .args(["auth", "logout"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No stored session"));
}
