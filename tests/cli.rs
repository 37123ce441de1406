use assert_cmd::Command;
use predicates::prelude::*;
use std::{fs, path::PathBuf};
use tempfile::TempDir;

const CONFIG: &str = r#"{"db_url":"postgres://example","current_user_name":""}"#;

fn write_config(dir: &TempDir) -> PathBuf {
    let path = dir.path().join(".gatorconfig.json");
    fs::write(&path, CONFIG).unwrap();
    path
}

fn gator(dir: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("gator"));
    cmd.env_remove("GATOR_CONFIG").env("HOME", dir.path());
    cmd
}

#[test]
fn no_arguments_is_an_error() {
    let dir = TempDir::new().unwrap();

    gator(&dir)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not enough arguments provided"));
}

#[test]
fn login_sets_the_current_user() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir);

    gator(&dir)
        .args(["login", "alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("User has been set to: alice"));

    let saved = fs::read_to_string(&path).unwrap();
    assert!(saved.contains(r#""current_user_name":"alice""#));
    assert!(saved.contains("postgres://example"));
}

#[test]
fn unknown_command_is_an_error() {
    let dir = TempDir::new().unwrap();
    write_config(&dir);

    gator(&dir)
        .arg("fly")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown command: fly"));
}

#[test]
fn login_without_username_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir);

    gator(&dir)
        .arg("login")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "the login handler expects a single argument, the username",
        ));

    assert_eq!(fs::read_to_string(&path).unwrap(), CONFIG);
}

#[test]
fn config_flag_overrides_home() {
    let home = TempDir::new().unwrap();
    let other = TempDir::new().unwrap();
    let path = write_config(&other);

    gator(&home)
        .arg("--config")
        .arg(&path)
        .args(["login", "bob", "ignored"])
        .assert()
        .success()
        .stdout(predicate::str::contains("User has been set to: bob"));

    assert!(fs::read_to_string(&path).unwrap().contains("bob"));
}

#[test]
fn missing_config_is_a_startup_error() {
    let dir = TempDir::new().unwrap();

    gator(&dir)
        .args(["login", "alice"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read config"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn options_after_command_reach_the_handler() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir);

    gator(&dir)
        .args(["login", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("User has been set to: --help"))
        .stdout(predicate::str::contains("Usage").not());

    assert!(fs::read_to_string(&path).unwrap().contains(r#""current_user_name":"--help""#));
}
