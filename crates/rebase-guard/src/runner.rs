//! Shell command execution.

use async_trait::async_trait;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::process::Command;

/// Result of a predicate command execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredicateOutcome {
    /// Exit code (0 = success; -1 when terminated by signal).
    pub exit_code: i32,

    /// Captured stdout.
    pub stdout: String,

    /// Captured stderr.
    pub stderr: String,
}

impl PredicateOutcome {
    /// Whether the command passed (exit code 0).
    pub fn passed(&self) -> bool {
        self.exit_code == 0
    }
}

/// Executes a shell command and yields its outcome once the child process
/// terminates.
///
/// Injected into the validator so unit tests can script outcomes without a
/// git binary or a real repository.
#[async_trait]
pub trait CommandExecutor: Send + Sync {
    /// Run `command` through a shell and wait for it to exit.
    ///
    /// Returns `Err` only when the command could not be launched at all;
    /// a launched command that exits non-zero is an `Ok` outcome.
    async fn run(&self, command: &str) -> anyhow::Result<PredicateOutcome>;
}

/// [`CommandExecutor`] backed by `sh -c`, optionally rooted in a working
/// directory.
#[derive(Debug, Clone, Default)]
pub struct ShellExecutor {
    workdir: Option<PathBuf>,
}

impl ShellExecutor {
    pub fn new(workdir: Option<PathBuf>) -> Self {
        Self { workdir }
    }
}

#[async_trait]
impl CommandExecutor for ShellExecutor {
    async fn run(&self, command: &str) -> anyhow::Result<PredicateOutcome> {
        let mut cmd = Command::new("sh");
        cmd.arg("-c")
            .arg(command)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        if let Some(dir) = &self.workdir {
            cmd.current_dir(dir);
        }

        let child = cmd.spawn()?;
        let output = child.wait_with_output().await?;

        Ok(PredicateOutcome {
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}
