//! Integration tests for the exec command (CLI)

use predicates::prelude::*;

use crate::helpers::Sandbox;

// ============================================================================
// Output Tests
// ============================================================================

#[test]
fn snapshot_exec_help() {
    let sandbox = Sandbox::new();
    let (stdout, stderr, exit_code) = sandbox.run(&["exec", "help"]);
    let output = format!(
        "=== folio exec help ===\nExit code: {}\n\n--- stdout ---\n{}\n--- stderr ---\n{}",
        exit_code, stdout, stderr
    );
    insta::assert_snapshot!("exec_help", output);
}

#[test]
fn exec_ls_lists_projects() {
    Sandbox::new()
        .assert_cmd()
        .args(["exec", "ls"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("total 3\n"))
        .stdout(predicate::str::contains("acrevault/"));
}

#[test]
fn exec_cat_document_prints_title() {
    let sandbox = Sandbox::new();
    let (stdout, _stderr, exit_code) = sandbox.run(&["exec", "cat", "acrevault"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.to_lowercase().contains("acrevault"));
}

#[test]
fn exec_cat_unknown_document() {
    Sandbox::new()
        .assert_cmd()
        .args(["exec", "cat", "nope"])
        .assert()
        .success()
        .stdout("cat: nope: No such file or directory\n");
}

#[test]
fn exec_unknown_command_exits_0() {
    Sandbox::new()
        .assert_cmd()
        .args(["exec", "sudo", "rm"])
        .assert()
        .success()
        .stdout("bash: sudo: command not found\n");
}

#[test]
fn exec_is_case_insensitive() {
    let sandbox = Sandbox::new();
    let (upper, _, _) = sandbox.run(&["exec", "WHOAMI"]);
    let (lower, _, _) = sandbox.run(&["exec", "whoami"]);
    assert_eq!(upper, lower);
    assert!(lower.starts_with("Rushist - Full Stack Software Developer"));
}

#[test]
fn exec_clear_and_exit_print_nothing() {
    let sandbox = Sandbox::new();
    for cmd in ["clear", "exit"] {
        let (stdout, _stderr, exit_code) = sandbox.run(&["exec", cmd]);
        assert_eq!(exit_code, 0);
        assert!(stdout.is_empty(), "{} printed {:?}", cmd, stdout);
    }
}

// ============================================================================
// JSON Tests
// ============================================================================

#[test]
fn exec_json_output_outcome() {
    let sandbox = Sandbox::new();
    let (stdout, _stderr, exit_code) = sandbox.run(&["exec", "--json", "contact"]);
    assert_eq!(exit_code, 0);

    let value: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(value["kind"], "output");
    assert!(value["lines"].as_array().is_some_and(|lines| !lines.is_empty()));
}

#[test]
fn exec_json_flag_after_command_words() {
    let sandbox = Sandbox::new();
    let (stdout, _stderr, exit_code) = sandbox.run(&["exec", "skills", "--json"]);
    assert_eq!(exit_code, 0);

    let value: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(value["kind"], "output");
}

#[test]
fn exec_json_simulation_outcome() {
    let sandbox = Sandbox::new();
    let (stdout, _stderr, _) = sandbox.run(&["exec", "--json", "airhockey"]);
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(value["kind"], "enter_simulation");
}

// ============================================================================
// Error Handling Tests
// ============================================================================

#[test]
fn exec_without_line_shows_error() {
    let sandbox = Sandbox::new();
    let (_stdout, stderr, exit_code) = sandbox.run(&["exec"]);
    assert_eq!(exit_code, 2);
    assert!(stderr.contains("required arguments"));
}
