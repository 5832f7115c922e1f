//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_serve_help() {
    let mut cmd = Command::cargo_bin("campctl").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Address to bind to"))
        .stdout(predicate::str::contains("--database-url"));
}

#[test]
fn test_add_activity_help() {
    let mut cmd = Command::cargo_bin("campctl").unwrap();
    cmd.arg("add-activity").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Difficulty rating"));
}

#[test]
fn test_init_db_creates_database() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("camp.db");

    let mut cmd = Command::cargo_bin("campctl").unwrap();
    cmd.arg("init-db")
        .arg("--database-url")
        .arg(format!("sqlite://{}", path.display()));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Schema ready"));
    assert!(path.exists());
}

#[test]
fn test_add_activity_prints_json() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}", dir.path().join("camp.db").display());

    let mut cmd = Command::cargo_bin("campctl").unwrap();
    cmd.env_remove("DATABASE_URL")
        .arg("add-activity")
        .arg("--name")
        .arg("Archery")
        .arg("--difficulty")
        .arg("2")
        .arg("--database-url")
        .arg(&url);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(r#""name":"Archery""#))
        .stdout(predicate::str::contains(r#""id":1"#));
}

#[test]
fn test_unknown_command_fails() {
    let mut cmd = Command::cargo_bin("campctl").unwrap();
    cmd.arg("launch-rockets");

    cmd.assert().failure();
}
