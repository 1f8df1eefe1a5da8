//! Integration tests for the non-interactive run mode (CLI)

use crate::helpers::Sandbox;

#[test]
fn piped_lines_are_evaluated() {
    let sandbox = Sandbox::new();
    sandbox.write_config("[terminal]\nwelcome = false\n");
    let (stdout, _stderr, exit_code) = sandbox.run_with_input(&[], "ls\nfoo\n");
    assert_eq!(exit_code, 0);
    assert!(stdout.starts_with("~/portfolio $ ls\ntotal 3\n"));
    assert!(stdout.ends_with("~/portfolio $ foo\nbash: foo: command not found\n"));
}

#[test]
fn piped_run_prints_banner() {
    let sandbox = Sandbox::new();
    let (stdout, _stderr, exit_code) = sandbox.run_with_input(&["run"], "");
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Welcome to Rushist's Portfolio Terminal v2.0.1"));
}

#[test]
fn piped_exit_stops_reading() {
    let sandbox = Sandbox::new();
    sandbox.write_config("[terminal]\nprompt = \"~\"\nwelcome = false\n");
    let (stdout, _stderr, exit_code) = sandbox.run_with_input(&["run", "--no-boot"], "exit\nls\n");
    assert_eq!(exit_code, 0);
    assert!(stdout.is_empty());
}

#[test]
fn version_flag_prints_version() {
    let sandbox = Sandbox::new();
    let (stdout, _stderr, exit_code) = sandbox.run(&["--version"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.starts_with(&format!("folio {}", env!("CARGO_PKG_VERSION"))));
}
