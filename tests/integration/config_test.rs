//! Integration tests for the config command (CLI)

use predicates::prelude::*;

use crate::helpers::Sandbox;

#[test]
fn config_path_honors_env_override() {
    let sandbox = Sandbox::new();
    let (stdout, _stderr, exit_code) = sandbox.run(&["config", "path"]);
    assert_eq!(exit_code, 0);
    assert_eq!(stdout.trim(), sandbox.config_path().display().to_string());
}

#[test]
fn config_show_prints_defaults_when_missing() {
    Sandbox::new()
        .assert_cmd()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[boot]"))
        .stdout(predicate::str::contains("variant = \"standard\""))
        .stdout(predicate::str::contains("tick_ms = 120"))
        .stdout(predicate::str::contains("mode = \"terminal\""));
}

#[test]
fn config_show_reflects_file() {
    let sandbox = Sandbox::new();
    sandbox.write_config("[host]\nmode = \"konami\"\n");
    let (stdout, _stderr, exit_code) = sandbox.run(&["config", "show"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("mode = \"konami\""));
    assert!(stdout.contains("prompt = \"~/portfolio\""));
}

#[test]
fn config_init_creates_file_once() {
    let sandbox = Sandbox::new();
    let (stdout, _stderr, exit_code) = sandbox.run(&["config", "init"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Created"));

    let content = std::fs::read_to_string(sandbox.config_path()).unwrap();
    assert!(content.contains("[hockey]"));

    let (stdout, _stderr, exit_code) = sandbox.run(&["config", "init"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("already exists"));
}

#[test]
fn config_migrate_without_yes_is_read_only_when_piped() {
    let sandbox = Sandbox::new();
    sandbox.write_config("[boot]\nenabled = false\n");
    let (stdout, _stderr, exit_code) = sandbox.run(&["config", "migrate"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("+ variant = \"standard\""));
    assert!(stdout.contains("No changes made."));

    let content = std::fs::read_to_string(sandbox.config_path()).unwrap();
    assert_eq!(content, "[boot]\nenabled = false\n");
}

#[test]
fn config_migrate_yes_keeps_existing_values() {
    let sandbox = Sandbox::new();
    sandbox.write_config("# mine\n[boot]\nenabled = false\n");
    let (stdout, _stderr, exit_code) = sandbox.run(&["config", "migrate", "--yes"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Config updated successfully."));

    let content = std::fs::read_to_string(sandbox.config_path()).unwrap();
    assert!(content.starts_with("# mine\n[boot]\nenabled = false\n"));
    assert!(content.contains("[terminal]"));
    assert!(content.contains("home_name = \"Rushist\""));

    let (stdout, _stderr, _) = sandbox.run(&["config", "migrate"]);
    assert!(stdout.contains("already up to date"));
}

#[test]
fn invalid_config_is_reported() {
    let sandbox = Sandbox::new();
    sandbox.write_config("[boot]\nvariant = \"turbo\"\n");
    let (_stdout, stderr, exit_code) = sandbox.run(&["config", "show"]);
    assert_eq!(exit_code, 1);
    assert!(stderr.contains("config.toml"));
}
