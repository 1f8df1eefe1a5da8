//! Integration tests for the hockey command (CLI)

use crate::helpers::Sandbox;

#[test]
fn hockey_plays_to_a_goal() {
    let sandbox = Sandbox::new();
    let (stdout, _stderr, exit_code) = sandbox.run(&["hockey"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("GOAL! Player 2 scores."));
    assert!(stdout.contains("39 ticks"));
}

#[test]
fn hockey_frames_have_fixed_width() {
    let sandbox = Sandbox::new();
    let (stdout, _stderr, _) = sandbox.run(&["hockey"]);
    let frame_lines: Vec<&str> = stdout
        .lines()
        .take_while(|line| !line.starts_with("GOAL"))
        .collect();
    assert_eq!(frame_lines.len() % 11, 0);
    assert!(frame_lines.iter().all(|line| line.chars().count() == 32));
}

#[test]
fn exec_airhockey_prints_frames_then_result() {
    let sandbox = Sandbox::new();
    let (stdout, _stderr, exit_code) = sandbox.run(&["exec", "airhockey"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.starts_with('+'));
    // The scripted game always ends with a left goal
    assert!(stdout.ends_with("GOAL! Player 2 scores.\n"));
}
