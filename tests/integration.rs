// Integration tests for the autorec CLI surface.
//
// These tests use assert_cmd to invoke the binary and verify
// exit codes and argument validation.

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to build a Command for the autorec binary.
fn autorec() -> Command {
    Command::cargo_bin("autorec").expect("binary should exist")
}

#[test]
fn cli_version_flag() {
    autorec()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("autorec"));
}

#[test]
fn cli_help_flag() {
    autorec()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Rank vehicle catalogs"));
}

#[test]
fn rank_requires_catalog() {
    autorec()
        .arg("rank")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn filter_requires_catalog() {
    autorec()
        .arg("filter")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn rank_rejects_unknown_format() {
    autorec()
        .args(["rank", "cars.json", "--format", "sarif"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn rank_rejects_unknown_profile() {
    autorec()
        .args(["rank", "cars.json", "--profile", "racer"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn quiet_conflicts_with_verbose() {
    autorec()
        .args(["-q", "-v", "classify"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}
