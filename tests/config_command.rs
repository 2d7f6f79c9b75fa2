use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use reticule::config::{Codec, ConfigSet, YamlCodec};

fn reticule(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("reticule").expect("binary should build");
    cmd.env("HOME", home).env_remove("RETICULE_LOG");
    cmd
}

fn config_file(home: &Path) -> PathBuf {
    home.join(".reticule").join("reticule")
}

fn stored(home: &Path) -> ConfigSet {
    let bytes = std::fs::read(config_file(home)).expect("config file should exist");
    YamlCodec.decode(&bytes).expect("config file should decode")
}

#[test]
fn create_then_update_then_delete() {
    let home = tempfile::tempdir().expect("tempdir should be created");

    reticule(home.path())
        .args(["config", "create", "reticule", "--name", "alice", "--key", "K1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("creating config"));

    let config_set = stored(home.path());
    assert_eq!(config_set.current, "alice");
    assert_eq!(
        config_set.get("alice").map(|p| p.auth.key.as_str()),
        Some("K1")
    );

    reticule(home.path())
        .args(["config", "create", "reticule", "--name", "bob", "--key", "K2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("creating config").not());

    reticule(home.path())
        .args([
            "config", "update", "reticule", "--name", "bob", "--rename", "carol", "--use",
        ])
        .assert()
        .success();

    let config_set = stored(home.path());
    assert_eq!(config_set.current, "carol");
    assert!(!config_set.contains("bob"));
    assert_eq!(
        config_set.get("carol").map(|p| p.auth.key.as_str()),
        Some("K2")
    );

    reticule(home.path())
        .args(["config", "delete", "reticule", "--name", "carol"])
        .assert()
        .success();

    let config_set = stored(home.path());
    assert_eq!(config_set.current, "carol");
    assert_eq!(config_set.len(), 1);
}

#[test]
fn duplicate_create_fails() {
    let home = tempfile::tempdir().expect("tempdir should be created");
    reticule(home.path())
        .args(["config", "create", "reticule", "--name", "alice"])
        .assert()
        .success();
    let before = std::fs::read(config_file(home.path())).expect("config file should exist");

    reticule(home.path())
        .args(["config", "create", "reticule", "--name", "alice", "--key", "other"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("already exists"));

    let after = std::fs::read(config_file(home.path())).expect("config file should exist");
    assert_eq!(before, after);
}

#[test]
fn update_without_config_fails() {
    let home = tempfile::tempdir().expect("tempdir should be created");
    reticule(home.path())
        .args(["config", "update", "reticule", "--name", "alice", "--key", "K"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
    assert!(!config_file(home.path()).exists());
}

#[test]
fn json_output_reports_change() {
    let home = tempfile::tempdir().expect("tempdir should be created");
    let output = reticule(home.path())
        .args(["--json", "config", "create", "reticule", "--name", "alice", "--secret", "S"])
        .output()
        .expect("command should run");
    assert!(output.status.success());

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be json");
    assert_eq!(value["action"], "created");
    assert_eq!(value["profile"], "alice");
    assert_eq!(value["current"], "alice");
    assert_eq!(value["created_file"], true);
    assert!(!String::from_utf8_lossy(&output.stdout).contains("\"S\""));
}
