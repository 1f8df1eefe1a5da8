//! Shared helpers for integration tests

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tempfile::TempDir;

/// Isolated environment: config file and log directory inside a temp dir.
pub struct Sandbox {
    pub dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join("config.toml")
    }

    pub fn write_config(&self, content: &str) {
        std::fs::write(self.config_path(), content).expect("Failed to write config");
    }

    /// Command for the folio binary with this sandbox applied.
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_folio"));
        apply_env(&mut cmd, self.dir.path(), &self.config_path());
        cmd
    }

    /// Same as [`Sandbox::command`], wrapped for assert_cmd.
    pub fn assert_cmd(&self) -> assert_cmd::Command {
        assert_cmd::Command::from_std(self.command())
    }

    /// Run folio and capture (stdout, stderr, exit code).
    pub fn run(&self, args: &[&str]) -> (String, String, i32) {
        let output = self
            .command()
            .args(args)
            .stdin(Stdio::null())
            .output()
            .expect("Failed to execute folio");
        collect(output)
    }

    /// Run folio with `input` piped to stdin.
    pub fn run_with_input(&self, args: &[&str], input: &str) -> (String, String, i32) {
        let mut child = self
            .command()
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to spawn folio");
        child
            .stdin
            .take()
            .expect("stdin is piped")
            .write_all(input.as_bytes())
            .expect("Failed to write stdin");
        collect(child.wait_with_output().expect("Failed to wait for folio"))
    }
}

fn apply_env(cmd: &mut Command, root: &Path, config: &Path) {
    cmd.env("NO_COLOR", "1")
        .env("FOLIO_CONFIG", config)
        .env("XDG_DATA_HOME", root.join("data"))
        .env_remove("RUST_LOG");
}

fn collect(output: std::process::Output) -> (String, String, i32) {
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);
    (stdout, stderr, exit_code)
}
